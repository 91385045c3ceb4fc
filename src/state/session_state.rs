// ============================================================================
// SESSION STATE - Estado de sesión/autenticación
// ============================================================================
// Única fuente de verdad de "quién está logueado". Invariante: current_user
// y token se establecen y limpian juntos; la única excepción es la ventana
// de verificación inicial, donde el token existe, el usuario aún no se
// resolvió y loading=true.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{User, UserPatch};

/// Tipo de operación asíncrona en vuelo. Cada emisión lleva un número de
/// secuencia monótono; una respuesta cuyo número fue superado se descarta
/// en lugar de aplicarse (la última emitida gana, no la última en llegar).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpKind {
    Verify,
    Login,
    Profile,
}

impl OpKind {
    fn index(self) -> usize {
        match self {
            OpKind::Verify => 0,
            OpKind::Login => 1,
            OpKind::Profile => 2,
        }
    }
}

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    current_user: Rc<RefCell<Option<User>>>,
    token: Rc<RefCell<Option<String>>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
    op_seq: Rc<RefCell<[u64; 3]>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl SessionState {
    /// Estado inicial: Unknown. loading=true hasta que la verificación de
    /// arranque resuelva (el guard muestra placeholder, nunca redirige).
    pub fn new() -> Self {
        Self {
            current_user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(true)),
            error: Rc::new(RefCell::new(None)),
            op_seq: Rc::new(RefCell::new([0; 3])),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // ------------------------------------------------------------------
    // Lectura
    // ------------------------------------------------------------------

    pub fn current_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn current_role(&self) -> Option<crate::models::Role> {
        self.current_user.borrow().as_ref().map(|u| u.role)
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.borrow().is_some()
    }

    // ------------------------------------------------------------------
    // Secuencias por operación
    // ------------------------------------------------------------------

    /// Emite un nuevo número de secuencia para la operación y limpia el
    /// error de la operación anterior
    pub fn begin(&self, op: OpKind) -> u64 {
        let mut seqs = self.op_seq.borrow_mut();
        seqs[op.index()] += 1;
        let seq = seqs[op.index()];
        drop(seqs);
        *self.error.borrow_mut() = None;
        seq
    }

    /// true si `seq` sigue siendo la emisión más reciente de `op`
    pub fn is_current(&self, op: OpKind, seq: u64) -> bool {
        self.op_seq.borrow()[op.index()] == seq
    }

    // ------------------------------------------------------------------
    // Transiciones. Todas notifican a los subscribers.
    // ------------------------------------------------------------------

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.notify();
    }

    pub fn set_error(&self, message: Option<String>) {
        *self.error.borrow_mut() = message;
        *self.loading.borrow_mut() = false;
        self.notify();
    }

    /// Unknown/Authenticated -> Unauthenticated (sin token al arrancar,
    /// verificación rechazada, o logout)
    pub fn apply_unauthenticated(&self) {
        *self.current_user.borrow_mut() = None;
        *self.token.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
        self.notify();
    }

    /// -> Authenticated con token y usuario resueltos juntos
    pub fn apply_authenticated(&self, token: String, user: User) {
        *self.token.borrow_mut() = Some(token);
        *self.current_user.borrow_mut() = Some(user);
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = None;
        self.notify();
    }

    /// Merge superficial del perfil sobre el usuario actual. Sin usuario
    /// (sesión caída entre el request y la respuesta) no hace nada.
    pub fn apply_profile_patch(&self, patch: UserPatch) {
        if let Some(user) = self.current_user.borrow_mut().as_mut() {
            user.merge(patch);
        }
        *self.loading.borrow_mut() = false;
        self.notify();
    }

    // ------------------------------------------------------------------
    // Reactividad
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn doctor() -> User {
        User {
            id: "d1".to_string(),
            name: "Dr. House".to_string(),
            email: "house@doctors.com".to_string(),
            role: Role::Doctor,
            phone: None,
            specialization: Some("Diagnostics".to_string()),
            date_of_birth: None,
            gender: None,
            address: None,
        }
    }

    /// current_user presente <=> token presente, salvo ventana de carga
    fn assert_invariant(state: &SessionState) {
        if !state.is_loading() {
            assert_eq!(state.current_user().is_some(), state.token().is_some());
        }
    }

    #[test]
    fn test_initial_state_is_unknown() {
        let state = SessionState::new();
        assert!(state.is_loading());
        assert!(state.current_user().is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_startup_without_token_goes_unauthenticated() {
        let state = SessionState::new();
        state.apply_unauthenticated();
        assert!(!state.is_loading());
        assert!(!state.is_authenticated());
        assert_invariant(&state);
    }

    #[test]
    fn test_login_success_sets_token_and_user_together() {
        let state = SessionState::new();
        state.apply_unauthenticated();
        state.apply_authenticated("T".to_string(), doctor());
        assert!(state.is_authenticated());
        assert_eq!(state.token().as_deref(), Some("T"));
        assert_eq!(state.current_role(), Some(Role::Doctor));
        assert!(state.error().is_none());
        assert_invariant(&state);
    }

    #[test]
    fn test_login_failure_keeps_previous_session() {
        let state = SessionState::new();
        state.apply_authenticated("T".to_string(), doctor());
        // Un segundo intento de login fallido no desautentica
        let _seq = state.begin(OpKind::Login);
        state.set_error(Some("Invalid credentials".to_string()));
        assert!(state.is_authenticated());
        assert_eq!(state.error().as_deref(), Some("Invalid credentials"));
        assert_eq!(state.token().as_deref(), Some("T"));
        assert_invariant(&state);
    }

    #[test]
    fn test_logout_always_clears_everything() {
        let state = SessionState::new();
        state.apply_authenticated("T".to_string(), doctor());
        state.apply_unauthenticated();
        assert!(!state.is_authenticated());
        assert!(state.token().is_none());
        assert_invariant(&state);
        // Idempotente
        state.apply_unauthenticated();
        assert!(!state.is_authenticated());
        assert_invariant(&state);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let state = SessionState::new();
        state.set_error(Some("Login failed".to_string()));
        let _ = state.begin(OpKind::Login);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_response_is_detected() {
        let state = SessionState::new();
        let first = state.begin(OpKind::Login);
        let second = state.begin(OpKind::Login);
        // La primera emisión quedó superada; solo la segunda puede aplicarse
        assert!(!state.is_current(OpKind::Login, first));
        assert!(state.is_current(OpKind::Login, second));
        // Las secuencias son por operación, no globales
        let verify = state.begin(OpKind::Verify);
        assert!(state.is_current(OpKind::Verify, verify));
        assert!(state.is_current(OpKind::Login, second));
    }

    #[test]
    fn test_profile_patch_merges_into_current_user() {
        let state = SessionState::new();
        state.apply_authenticated("T".to_string(), doctor());
        state.apply_profile_patch(UserPatch {
            phone: Some("+15550100".to_string()),
            ..Default::default()
        });
        let user = state.current_user().unwrap();
        assert_eq!(user.phone.as_deref(), Some("+15550100"));
        // Campos ausentes del patch se conservan
        assert_eq!(user.name, "Dr. House");
        assert_invariant(&state);
    }

    #[test]
    fn test_profile_patch_without_session_is_noop() {
        let state = SessionState::new();
        state.apply_unauthenticated();
        state.apply_profile_patch(UserPatch {
            name: Some("X".to_string()),
            ..Default::default()
        });
        assert!(state.current_user().is_none());
        assert_invariant(&state);
    }

    #[test]
    fn test_subscribers_notified_on_transitions() {
        use std::cell::Cell;
        let state = SessionState::new();
        let fired = Rc::new(Cell::new(0u32));
        {
            let fired = fired.clone();
            state.subscribe(move || fired.set(fired.get() + 1));
        }
        state.apply_unauthenticated();
        state.apply_authenticated("T".to_string(), doctor());
        assert_eq!(fired.get(), 2);
    }
}
