//! Gateway authorizer: renders token validation into an allow/deny
//! policy document a request-routing gateway can act on.

use serde::Serialize;
use std::sync::Arc;

use crate::auth::token::{extract_bearer_token, TokenManager};
use crate::auth::user::UserRole;
use crate::constants::{ANONYMOUS_PRINCIPAL, INVOKE_ACTION, POLICY_VERSION};

/// Authorization effect for a policy statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Single statement granting or denying invocation of a resource.
/// The resource string passes through unchanged; no wildcard matching.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Resource")]
    pub resource: String,
}

/// Policy document wrapper. One statement per decision is sufficient.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

/// Authorization decision handed to the gateway. Created fresh per
/// request, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPolicy {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

impl AuthPolicy {
    fn build(principal_id: String, effect: Effect, resource: &str) -> Self {
        Self {
            principal_id,
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: resource.to_string(),
                }],
            },
        }
    }

    pub fn effect(&self) -> Effect {
        self.policy_document.statement[0].effect
    }
}

/// Decides access for incoming gateway requests by validating the
/// presented bearer token against the admin role.
pub struct GatewayAuthorizer {
    token_manager: Arc<TokenManager>,
}

impl GatewayAuthorizer {
    pub fn new(token_manager: Arc<TokenManager>) -> Self {
        Self { token_manager }
    }

    /// Renders an allow/deny decision for a bearer header and a method
    /// resource. A decision is always produced: a missing or malformed
    /// header, or any validation failure, yields Deny with the anonymous
    /// principal rather than an error.
    pub fn authorize(&self, auth_header: Option<&str>, method_resource: &str) -> AuthPolicy {
        let claims = auth_header
            .and_then(extract_bearer_token)
            .and_then(|token| self.token_manager.validate(token, UserRole::Admin));

        match claims {
            Some(claims) => {
                let principal = if claims.sub.is_empty() {
                    ANONYMOUS_PRINCIPAL.to_string()
                } else {
                    claims.sub
                };
                AuthPolicy::build(principal, Effect::Allow, method_resource)
            }
            None => {
                log::debug!("Denying invocation of {}", method_resource);
                AuthPolicy::build(
                    ANONYMOUS_PRINCIPAL.to_string(),
                    Effect::Deny,
                    method_resource,
                )
            }
        }
    }
}
