use campus_nav::prelude::{AuthState, Role, SignInError};
use dioxus::prelude::*;

/// Login flow state shared through context from the app root
#[derive(Clone, Copy)]
pub struct AuthHandle {
    pub state: Signal<AuthState>,
    /// Validation message shown on the login page
    pub error: Signal<Option<String>>,
}

pub fn use_auth_state() -> AuthHandle {
    let state = use_signal(AuthState::default);
    let error = use_signal(|| None);

    AuthHandle { state, error }
}

impl AuthHandle {
    pub fn current(&self) -> AuthState {
        *self.state.read()
    }

    /// Role picked on the login page but not yet confirmed
    pub fn picked_role(&self) -> Option<Role> {
        match self.current() {
            AuthState::RoleSelected(role) => Some(role),
            _ => None,
        }
    }

    pub fn pick_role(&mut self, role: Role) {
        self.state.write().pick_role(role);
        self.error.set(None);
    }

    /// Confirm the picked role; on failure the message lands in `error`
    pub fn sign_in(&mut self) -> Option<Role> {
        let result = self.state.write().sign_in();
        self.settle(result)
    }

    pub fn demo_login(&mut self, role: Role) -> Option<Role> {
        let result = self.state.write().demo_login(role);
        self.settle(result)
    }

    pub fn logout(&mut self) {
        self.state.write().logout();
        self.error.set(None);
    }

    fn settle(&mut self, result: Result<Role, SignInError>) -> Option<Role> {
        match result {
            Ok(role) => {
                self.error.set(None);
                Some(role)
            }
            Err(err) => {
                tracing::debug!("sign-in rejected: {err}");
                self.error.set(Some(err.to_string()));
                None
            }
        }
    }
}
