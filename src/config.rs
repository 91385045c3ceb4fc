use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub retry_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:5000/api".to_string(),
            api_url_production: "https://health-management-backend.onrender.com/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            retry_attempts: 3,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000/api").to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://health-management-backend.onrender.com/api").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("3").parse().unwrap_or(3),
        }
    }

    /// Obtiene la URL del API según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
