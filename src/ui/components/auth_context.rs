use crate::auth::{AuthError, AuthService};
use crate::models::UserProfile;
use crate::ui::use_auth_service;
use dioxus::prelude::*;
use tracing::debug;

/// Login state shared across the app
///
/// Components read the signals; anything that touches the session store
/// calls [`AuthState::trigger_auth_check`] afterwards so every reader
/// re-renders.
#[derive(Clone)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    pub user: Signal<Option<UserProfile>>,
    service: AuthService,
}

impl AuthState {
    /// Re-read the session store
    pub fn trigger_auth_check(&self) {
        let logged_in = self.service.is_logged_in();
        let user = if logged_in {
            self.service.current_user()
        } else {
            None
        };
        debug!("Auth check: logged_in={}", logged_in);

        let mut is_authenticated = self.is_authenticated;
        let mut current_user = self.user;
        is_authenticated.set(logged_in);
        current_user.set(user);
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .read()
            .as_ref()
            .map(UserProfile::is_admin)
            .unwrap_or(false)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        let result = self.service.logout();
        self.trigger_auth_check();
        result
    }
}

#[component]
pub fn AuthStateProvider(children: Element) -> Element {
    let service = use_auth_service();
    let is_authenticated = use_signal(|| service.is_logged_in());
    let user = use_signal(|| service.current_user());

    use_context_provider(|| AuthState {
        is_authenticated,
        user,
        service: service.clone(),
    });

    rsx! {
        {children}
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
