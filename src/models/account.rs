use serde::{Deserialize, Serialize};

/// A stored user account. Owned by the storage backend; the auth core
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Display name
    pub name: String,
    /// Account identifier. Always held in lowercase form; every entry
    /// point normalizes before storing or comparing.
    pub email: String,
    /// Argon2id PHC hash of the account password
    pub password_hash: String,
    /// Whether the account carries the admin role
    pub is_admin: bool,
}

/// Incoming account creation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Outgoing account view. Never exposes the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            is_admin: account.is_admin,
        }
    }
}
