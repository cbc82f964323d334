use dioxus::prelude::*;
use hotelhub::api::ApiClient;
use hotelhub::auth::{open_session_store, AuthService};
use hotelhub::config::Config;
use hotelhub::ui::{make_config, App};
use hotelhub::AppContext;
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("Starting hotelhub");

    let config = Config::load();
    let session = open_session_store(&config.user_file());
    let api = ApiClient::new(config.api_base_url.clone(), session);
    let auth = AuthService::new(api);

    if auth.is_logged_in() {
        info!("Restored session for {:?}", auth.current_user().map(|u| u.email));
    }

    let context = AppContext::new(config, auth);

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
