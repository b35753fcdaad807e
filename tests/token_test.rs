use blog_gate::auth::token::{extract_bearer_token, TokenManager};
use blog_gate::auth::user::UserRole;
use blog_gate::config::AuthConfig;

fn auth_config() -> AuthConfig {
    AuthConfig {
        issuer: "blog-gate-tests".to_string(),
        audience: "blog-gate-clients".to_string(),
        secret: "integration-test-signing-key-0123456789".to_string(),
        token_ttl_secs: 300,
    }
}

#[test]
fn test_issue_then_validate_round_trip() {
    let token_manager = TokenManager::new(&auth_config());

    let token = token_manager
        .issue("alice@example.com", "Alice", UserRole::Admin)
        .unwrap();
    assert!(!token.is_empty());

    let claims = token_manager.validate(&token, UserRole::Admin).unwrap();
    assert_eq!(claims.sub, "alice@example.com");
    assert_eq!(claims.name, "Alice");
    assert_eq!(claims.role, UserRole::Admin);
    assert_eq!(claims.iss, "blog-gate-tests");
    assert_eq!(claims.aud, "blog-gate-clients");
}

#[test]
fn test_garbage_token_rejected() {
    let token_manager = TokenManager::new(&auth_config());

    assert!(token_manager
        .validate("invalid.token.here", UserRole::Admin)
        .is_none());
    assert!(token_manager.validate("", UserRole::Admin).is_none());
}

#[test]
fn test_expired_token_rejected() {
    let token_manager = TokenManager::new(&auth_config());

    // A zero TTL puts the expiry at issuance time; the boundary second
    // is already invalid
    let token = token_manager
        .issue_with_ttl("alice@example.com", "Alice", UserRole::Admin, 0)
        .unwrap();

    assert!(token_manager.validate(&token, UserRole::Admin).is_none());
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let issuing_manager = TokenManager::new(&auth_config());

    let mut other_config = auth_config();
    other_config.secret = "a-completely-different-signing-key-9876543210".to_string();
    let validating_manager = TokenManager::new(&other_config);

    let token = issuing_manager
        .issue("alice@example.com", "Alice", UserRole::Admin)
        .unwrap();

    assert!(issuing_manager.validate(&token, UserRole::Admin).is_some());
    assert!(validating_manager
        .validate(&token, UserRole::Admin)
        .is_none());
}

#[test]
fn test_audience_mismatch_rejected() {
    let issuing_manager = TokenManager::new(&auth_config());

    let mut other_config = auth_config();
    other_config.audience = "some-other-service".to_string();
    let validating_manager = TokenManager::new(&other_config);

    let token = issuing_manager
        .issue("alice@example.com", "Alice", UserRole::Admin)
        .unwrap();

    assert!(validating_manager
        .validate(&token, UserRole::Admin)
        .is_none());
}

#[test]
fn test_issuer_mismatch_rejected() {
    let issuing_manager = TokenManager::new(&auth_config());

    let mut other_config = auth_config();
    other_config.issuer = "someone-else".to_string();
    let validating_manager = TokenManager::new(&other_config);

    let token = issuing_manager
        .issue("alice@example.com", "Alice", UserRole::Admin)
        .unwrap();

    assert!(validating_manager
        .validate(&token, UserRole::Admin)
        .is_none());
}

#[test]
fn test_role_requirement_enforced() {
    let token_manager = TokenManager::new(&auth_config());

    let token = token_manager
        .issue("bob@example.com", "Bob", UserRole::Normal)
        .unwrap();

    // The signature is fine but the role claim does not satisfy admin
    assert!(token_manager.validate(&token, UserRole::Admin).is_none());
    assert!(token_manager.validate(&token, UserRole::Normal).is_some());
}

#[test]
fn test_validate_is_idempotent() {
    let token_manager = TokenManager::new(&auth_config());

    let token = token_manager
        .issue("alice@example.com", "Alice", UserRole::Admin)
        .unwrap();

    let first = token_manager.validate(&token, UserRole::Admin).unwrap();
    let second = token_manager.validate(&token, UserRole::Admin).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extract_bearer_token() {
    assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    assert_eq!(extract_bearer_token("bearer abc.def.ghi"), None);
    assert_eq!(extract_bearer_token("Basic dXNlcjpwYXNz"), None);
    assert_eq!(extract_bearer_token(""), None);
}
