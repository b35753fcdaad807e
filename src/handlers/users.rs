//! Account management handlers
//!
//! All routes here sit behind the admin gate. Responses carry profile
//! views only; the stored hash never leaves the storage layer.

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Reply;

use super::response::{empty_reply, json_reply, message_reply};
use crate::auth::credentials::hash_password;
use crate::models::account::{Account, AccountProfile, NewAccount};
use crate::storage::traits::SharedAccountStore;

/// POST /api/users: lowercases the email, hashes the password and stores
/// the account. Returns the profile of the stored account.
pub async fn handle_add_account(
    store: SharedAccountStore,
    request: NewAccount,
) -> Result<impl Reply, Infallible> {
    let password_hash = match hash_password(&request.password) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Failed to hash password: {}", e);
            return Ok(message_reply(
                "Account creation failed",
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
    };

    let account = Account {
        name: request.name,
        email: request.email.to_lowercase(),
        password_hash,
        is_admin: request.is_admin,
    };

    log::info!("Saving account {}", account.email);
    match store.put_account(account.clone()).await {
        Ok(()) => Ok(json_reply(&AccountProfile::from(&account), StatusCode::OK)),
        Err(e) => {
            log::error!("Failed to save account {}: {}", account.email, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// GET /api/users/{email}
pub async fn handle_get_account(
    email: String,
    store: SharedAccountStore,
) -> Result<impl Reply, Infallible> {
    match store.find_account(&email.to_lowercase()).await {
        Ok(Some(account)) => Ok(json_reply(&AccountProfile::from(&account), StatusCode::OK)),
        Ok(None) => Ok(empty_reply(StatusCode::NOT_FOUND)),
        Err(e) => {
            log::error!("Failed to load account {}: {}", email, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// GET /api/users
pub async fn handle_list_accounts(store: SharedAccountStore) -> Result<impl Reply, Infallible> {
    match store.list_accounts().await {
        Ok(accounts) => {
            let profiles: Vec<AccountProfile> =
                accounts.iter().map(AccountProfile::from).collect();
            Ok(json_reply(&profiles, StatusCode::OK))
        }
        Err(e) => {
            log::error!("Failed to list accounts: {}", e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// DELETE /api/users/{email}
pub async fn handle_remove_account(
    email: String,
    store: SharedAccountStore,
) -> Result<impl Reply, Infallible> {
    log::info!("Deleting account {}", email);
    match store.delete_account(&email.to_lowercase()).await {
        Ok(()) => Ok(empty_reply(StatusCode::OK)),
        Err(e) => {
            log::error!("Failed to delete account {}: {}", email, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
