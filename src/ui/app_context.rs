use crate::api::ApiClient;
use crate::auth::AuthService;
use crate::config::Config;
use dioxus::prelude::*;

/// Long-lived services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub auth: AuthService,
}

impl AppContext {
    pub fn new(config: Config, auth: AuthService) -> Self {
        Self {
            config,
            api: auth.api().clone(),
            auth,
        }
    }
}

pub fn use_api() -> ApiClient {
    use_context::<AppContext>().api
}

pub fn use_auth_service() -> AuthService {
    use_context::<AppContext>().auth
}
