// tour-client/tests/session_flow.rs
// 会话流程集成测试

mod common;

use common::{TOKEN, harness, jwt, logged_in};
use serde_json::json;
use shared::error::messages;
use shared::util::now_secs;
use tempfile::TempDir;
use tour_client::storage::{TOKEN_KEY, USER_KEY};
use tour_client::{
    AdminUser, AnonymousReason, ApiClient, AuthStatus, ClientConfig, LoginOutcome, SessionStore,
};

#[tokio::test]
async fn test_login_stores_session_and_attaches_bearer() {
    let h = harness().await;

    let outcome = h.client.login("admin", "secret").await.unwrap();
    let LoginOutcome::Success(data) = outcome else {
        panic!("login should succeed");
    };
    assert_eq!(data.token, TOKEN);

    assert_eq!(h.store.get(TOKEN_KEY).unwrap().as_deref(), Some(TOKEN));
    let user: AdminUser = serde_json::from_str(&h.store.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user, AdminUser::new(1, "admin"));
    assert!(h.client.is_authenticated());

    let page = h.client.admin_recommendors().list(&Default::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(
        h.backend.auth_headers(),
        vec![Some("Bearer abc.def.ghi".to_string())]
    );
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_login_failure_shows_server_message_once() {
    let h = harness().await;

    let outcome = h.client.login("admin", "wrong").await.unwrap();
    match outcome {
        LoginOutcome::Failure { message } => assert_eq!(message, "Invalid username or password"),
        LoginOutcome::Success(_) => panic!("login should fail"),
    }
    assert_eq!(h.notifier.errors(), vec!["Invalid username or password"]);
    // a rejected login is not a session expiry
    assert_eq!(h.navigator.redirects(), 0);
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_login_unreachable_uses_default_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (client, _, notifier, _) = common::client_for(&format!("http://{addr}/api"));

    let outcome = client.login("admin", "secret").await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(notifier.errors(), vec![messages::LOGIN_FAILED]);
}

#[tokio::test]
async fn test_logout_clears_session_and_redirects() {
    let h = logged_in().await;
    assert!(h.client.is_authenticated());

    h.client.logout().await.unwrap();

    assert!(!h.client.is_authenticated());
    assert!(h.store.is_empty());
    assert_eq!(h.navigator.redirects(), 1);
    assert_eq!(h.backend.logouts(), 1);
}

#[tokio::test]
async fn test_logout_without_backend_still_clears() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (client, store, notifier, navigator) = common::client_for(&format!("http://{addr}/api"));
    store.set(TOKEN_KEY, TOKEN).unwrap();
    store.set(USER_KEY, r#"{"id":1,"username":"admin"}"#).unwrap();

    client.logout().await.unwrap();

    assert!(store.is_empty());
    assert_eq!(navigator.redirects(), 1);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_expired_token_is_not_authenticated() {
    let h = harness().await;
    let token = jwt(&json!({"user_id": 1, "username": "admin", "exp": now_secs() - 10}));
    h.store.set(TOKEN_KEY, &token).unwrap();
    h.store.set(USER_KEY, r#"{"id":1,"username":"admin"}"#).unwrap();

    assert!(!h.client.is_authenticated());
    assert!(h.store.is_empty());
    // purely local
    assert!(h.backend.auth_headers().is_empty());
}

#[tokio::test]
async fn test_init_auth_restores_file_session() {
    let (addr, _backend) = common::spawn_backend().await;
    let temp_dir = TempDir::new().unwrap();
    let config = ClientConfig::new(format!("http://{addr}/api")).with_storage_dir(temp_dir.path());

    let client = ApiClient::new(&config).unwrap();
    assert_eq!(
        client.session().init_auth(),
        AuthStatus::Anonymous(AnonymousReason::NoToken)
    );
    assert!(client.login("admin", "secret").await.unwrap().is_success());

    // a new client over the same directory picks the session up
    let restarted = ApiClient::new(&config).unwrap();
    match restarted.session().init_auth() {
        AuthStatus::Authenticated(user) => assert_eq!(user.username, "admin"),
        other => panic!("expected restored session, got {other:?}"),
    }
    assert!(restarted.is_admin());
}

#[tokio::test]
async fn test_verify_refresh_and_me() {
    let h = harness().await;
    assert!(!h.client.verify_token().await);
    assert!(h.client.current_user().await.is_none());
    // neither call reached the server without a token
    assert!(h.backend.auth_headers().is_empty());

    h.client.login("admin", "secret").await.unwrap();
    assert!(h.client.verify_token().await);

    let user = h.client.current_user().await.unwrap();
    assert!(user.is_super_admin());

    let token = h.client.refresh_token().await.unwrap();
    assert_eq!(token, "new.token.value");
    assert_eq!(h.store.get(TOKEN_KEY).unwrap().as_deref(), Some("new.token.value"));
    assert!(h.store.get(USER_KEY).unwrap().is_some());
}
