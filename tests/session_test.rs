mod support;

use chrono::Utc;
use hotelhub::api::ApiClient;
use hotelhub::auth::session::{store_user, stored_user};
use hotelhub::auth::{AuthService, MemorySessionStore, SessionKey, SessionStore};
use hotelhub::models::UserProfile;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use support::tracing_init;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

fn jwt(exp: i64) -> String {
    encode(
        &Header::default(),
        &Claims {
            sub: "lan@example.com".to_string(),
            exp,
        },
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

fn admin() -> UserProfile {
    UserProfile {
        user_id: Some(3),
        first_name: "Lan".to_string(),
        last_name: "Pham".to_string(),
        email: "lan@example.com".to_string(),
        role: Some("ADMIN".to_string()),
        ..Default::default()
    }
}

fn service() -> AuthService {
    // Nothing listens on the discard port; these tests never reach the network
    AuthService::new(ApiClient::new(
        "http://127.0.0.1:9".to_string(),
        MemorySessionStore::shared(),
    ))
}

#[test]
fn test_session_survives_until_logout() {
    tracing_init();

    let auth = service();
    let session = auth.api().session().clone();
    assert!(!auth.is_logged_in());

    let tomorrow = Utc::now().timestamp() + 86_400;
    session.set(SessionKey::AuthToken, &jwt(tomorrow)).unwrap();
    store_user(session.as_ref(), &admin()).unwrap();

    assert!(auth.is_logged_in());
    let user = auth.current_user().unwrap();
    assert_eq!(user.full_name(), "Lan Pham");
    assert!(user.is_admin());

    auth.logout().unwrap();
    assert!(!auth.is_logged_in());
    assert_eq!(session.get(SessionKey::AuthToken).unwrap(), None);
    assert!(stored_user(session.as_ref()).is_none());
}

#[test]
fn test_expired_token_counts_as_logged_out() {
    tracing_init();

    let auth = service();
    let session = auth.api().session().clone();
    let yesterday = Utc::now().timestamp() - 86_400;
    session.set(SessionKey::AuthToken, &jwt(yesterday)).unwrap();
    store_user(session.as_ref(), &admin()).unwrap();

    assert!(!auth.is_logged_in());
    // The profile stays readable; only the token has lapsed
    assert!(auth.current_user().is_some());
}

#[test]
fn test_corrupt_user_json_is_ignored() {
    tracing_init();

    let store = MemorySessionStore::new();
    store.set(SessionKey::User, "{not json").unwrap();
    assert!(stored_user(&store).is_none());
}

#[tokio::test]
async fn test_register_validation_runs_before_any_request() {
    tracing_init();

    let auth = service();
    let request = hotelhub::api::auth::RegisterRequest {
        first_name: "Lan".to_string(),
        last_name: "Pham".to_string(),
        email: "lan@example.com".to_string(),
        phone_number: "0901234567".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
    };

    let err = auth.register(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
}
