use std::sync::Arc;

use blog_gate::auth::credentials::hash_password;
use blog_gate::auth::login::{LoginError, LoginRequest, LoginService};
use blog_gate::auth::token::TokenManager;
use blog_gate::auth::user::UserRole;
use blog_gate::config::AuthConfig;
use blog_gate::models::account::Account;
use blog_gate::storage::memory::MemoryAccountStore;
use blog_gate::storage::traits::{AccountStore, SharedAccountStore};

fn auth_config() -> AuthConfig {
    AuthConfig {
        issuer: "blog-gate-tests".to_string(),
        audience: "blog-gate-clients".to_string(),
        secret: "integration-test-signing-key-0123456789".to_string(),
        token_ttl_secs: 300,
    }
}

async fn service_with_account(email: &str, password: &str, is_admin: bool) -> LoginService {
    let store = MemoryAccountStore::new();
    store
        .put_account(Account {
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            is_admin,
        })
        .await
        .unwrap();

    let accounts: SharedAccountStore = Arc::new(store);
    let token_manager = Arc::new(TokenManager::new(&auth_config()));
    LoginService::new(accounts, token_manager)
}

#[tokio::test]
async fn test_unknown_email_is_not_found() {
    let service = service_with_account("alice@example.com", "correct horse", true).await;

    let result = service
        .login(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    assert!(matches!(result, Err(LoginError::NotFound)));
}

#[tokio::test]
async fn test_wrong_password_is_mismatch() {
    let service = service_with_account("alice@example.com", "correct horse", true).await;

    let result = service
        .login(&LoginRequest {
            email: "alice@example.com".to_string(),
            password: "wrong horse".to_string(),
        })
        .await;

    assert!(matches!(result, Err(LoginError::Mismatch)));
}

#[tokio::test]
async fn test_successful_login_issues_token() {
    let service = service_with_account("alice@example.com", "correct horse", true).await;

    let success = service
        .login(&LoginRequest {
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();

    assert!(!success.token.is_empty());
    assert_eq!(success.name, "Alice");
    assert_eq!(success.email, "alice@example.com");

    // The issued token carries the account's role
    let token_manager = TokenManager::new(&auth_config());
    let claims = token_manager
        .validate(&success.token, UserRole::Admin)
        .unwrap();
    assert_eq!(claims.sub, "alice@example.com");
    assert_eq!(claims.name, "Alice");
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let service = service_with_account("alice@example.com", "correct horse", false).await;

    let success = service
        .login(&LoginRequest {
            email: "Alice@Example.COM".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();

    // The echoed identity is the stored lowercase form
    assert_eq!(success.email, "alice@example.com");
}

#[tokio::test]
async fn test_normal_account_gets_normal_role() {
    let service = service_with_account("bob@example.com", "hunter2!", false).await;

    let success = service
        .login(&LoginRequest {
            email: "bob@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap();

    let token_manager = TokenManager::new(&auth_config());
    assert!(token_manager
        .validate(&success.token, UserRole::Admin)
        .is_none());
    assert!(token_manager
        .validate(&success.token, UserRole::Normal)
        .is_some());
}
