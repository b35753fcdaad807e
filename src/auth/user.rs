use serde::{Deserialize, Serialize};

/// Access role carried in the token's role claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Normal,
    Admin,
}

impl UserRole {
    /// Maps the stored account flag to a role
    pub fn from_is_admin(is_admin: bool) -> Self {
        if is_admin {
            UserRole::Admin
        } else {
            UserRole::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Normal => "normal",
            UserRole::Admin => "admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_admin_flag() {
        assert_eq!(UserRole::from_is_admin(true), UserRole::Admin);
        assert_eq!(UserRole::from_is_admin(false), UserRole::Normal);
    }

    #[test]
    fn test_role_claim_value() {
        // The wire value is the single source of truth for the role claim
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Normal).unwrap(),
            "\"normal\""
        );
    }
}
