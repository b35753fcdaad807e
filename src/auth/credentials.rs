//! Credential verification against stored account records
//!
//! Passwords are hashed with Argon2id and stored as PHC strings; the
//! per-hash salt is embedded in the string, so no process-wide salt
//! configuration exists.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::error::{BlogGateError, Result};
use crate::models::account::Account;

/// Hashes a password with Argon2id, producing a PHC string for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| BlogGateError::AuthError(format!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored PHC hash. The comparison is
/// constant-time inside the Argon2 verifier. A malformed stored hash
/// counts as a mismatch rather than an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

/// Checks a submitted email/password pair against a stored account.
/// Identity compares case-insensitively; the stored side is always
/// lowercase. Pure over its inputs, no side effects.
pub fn verify_credentials(email: &str, password: &str, account: &Account) -> bool {
    if email.to_lowercase() != account.email {
        return false;
    }

    verify_password(password, &account.password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_account(password: &str) -> Account {
        Account {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: hash_password(password).unwrap(),
            is_admin: true,
        }
    }

    #[test]
    fn test_hash_produces_phc_string() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = hash_password("hunter2!").unwrap();
        let second = hash_password("hunter2!").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("hunter2!", &first));
        assert!(verify_password("hunter2!", &second));
    }

    #[test]
    fn test_verify_credentials_matches() {
        let account = stored_account("correct horse");
        assert!(verify_credentials("alice@example.com", "correct horse", &account));
    }

    #[test]
    fn test_one_character_change_flips_result() {
        let account = stored_account("correct horse");
        assert!(!verify_credentials("alice@example.com", "correct hors3", &account));
    }

    #[test]
    fn test_email_is_case_insensitive() {
        let account = stored_account("correct horse");
        assert!(verify_credentials("Alice@Example.COM", "correct horse", &account));
    }

    #[test]
    fn test_wrong_identity_fails() {
        let account = stored_account("correct horse");
        assert!(!verify_credentials("bob@example.com", "correct horse", &account));
    }

    #[test]
    fn test_malformed_stored_hash_is_mismatch() {
        let mut account = stored_account("correct horse");
        account.password_hash = "not-a-phc-string".to_string();
        assert!(!verify_credentials("alice@example.com", "correct horse", &account));
    }
}
