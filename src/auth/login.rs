//! Login flow: account lookup, credential verification, token issuance

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::auth::credentials::verify_credentials;
use crate::auth::token::TokenManager;
use crate::auth::user::UserRole;
use crate::error::BlogGateError;
use crate::storage::traits::SharedAccountStore;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload echoed back to the client
#[derive(Debug, Serialize)]
pub struct LoginSuccess {
    pub token: String,
    pub name: String,
    pub email: String,
}

/// Typed login outcome. HTTP status mapping is the handler's job.
#[derive(Debug)]
pub enum LoginError {
    /// No account exists for the submitted email
    NotFound,
    /// The account exists but the password does not match
    Mismatch,
    /// Credentials were correct but the token could not be issued
    Internal(BlogGateError),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Account not found"),
            Self::Mismatch => write!(f, "Password mismatches."),
            Self::Internal(e) => write!(f, "Login failed internally: {}", e),
        }
    }
}

/// Orchestrates the fixed login sequence: look the account up first,
/// verify the submitted credentials, then issue a token.
pub struct LoginService {
    accounts: SharedAccountStore,
    token_manager: Arc<TokenManager>,
}

impl LoginService {
    pub fn new(accounts: SharedAccountStore, token_manager: Arc<TokenManager>) -> Self {
        Self {
            accounts,
            token_manager,
        }
    }

    /// Runs the login sequence for one request. The account lookup comes
    /// first; an unknown identifier fails fast before any hash work.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess, LoginError> {
        let email = request.email.to_lowercase();

        let account = self
            .accounts
            .find_account(&email)
            .await
            .map_err(LoginError::Internal)?
            .ok_or(LoginError::NotFound)?;

        if !verify_credentials(&email, &request.password, &account) {
            log::debug!("Credential mismatch for {}", email);
            return Err(LoginError::Mismatch);
        }

        let role = UserRole::from_is_admin(account.is_admin);
        let token = self
            .token_manager
            .issue(&account.email, &account.name, role)
            .map_err(LoginError::Internal)?;

        Ok(LoginSuccess {
            token,
            name: account.name,
            email: account.email,
        })
    }
}
