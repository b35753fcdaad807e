use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::user::UserRole;
use crate::config::AuthConfig;
use crate::constants::BEARER_PREFIX;
use crate::error::{BlogGateError, Result};

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Access role. Single role claim shared by every validation site.
    pub role: UserRole,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Not before (as UTC timestamp)
    pub nbf: usize,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
}

/// Current time as whole seconds since the epoch
fn unix_now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as usize
}

impl Claims {
    /// Check if the token is expired. A token is invalid the instant its
    /// expiry time is reached, not a moment later.
    pub fn is_expired(&self) -> bool {
        unix_now() >= self.exp
    }
}

/// Manages signed token operations: issuance at login, validation on
/// every protected request. Stateless over immutable configuration.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    token_ttl_secs: u64,
}

impl TokenManager {
    /// Creates a token manager from loaded configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// Issues a signed token for the given subject with the configured TTL
    pub fn issue(&self, sub: &str, name: &str, role: UserRole) -> Result<String> {
        self.issue_with_ttl(sub, name, role, self.token_ttl_secs)
    }

    /// Issues a signed token with an explicit TTL in seconds
    pub fn issue_with_ttl(
        &self,
        sub: &str,
        name: &str,
        role: UserRole,
        ttl_secs: u64,
    ) -> Result<String> {
        let now = unix_now();
        let claims = Claims {
            sub: sub.to_string(),
            name: name.to_string(),
            role,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: now + ttl_secs as usize,
            nbf: now,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| BlogGateError::AuthError(format!("Failed to sign token: {}", e)))
    }

    /// Validates a token and requires its role claim to equal `required_role`.
    ///
    /// Every failure mode collapses to `None`; callers cannot distinguish
    /// a bad signature from a wrong issuer or an expired lifetime. The
    /// distinguished reason is logged at debug level.
    pub fn validate(&self, token: &str, required_role: UserRole) -> Option<Claims> {
        match self.decode_checked(token) {
            Ok(claims) if claims.role == required_role => Some(claims),
            Ok(claims) => {
                log::debug!(
                    "Token rejected: role '{}' does not satisfy required '{}'",
                    claims.role.as_str(),
                    required_role.as_str()
                );
                None
            }
            Err(e) => {
                log::debug!("Token rejected: {}", e);
                None
            }
        }
    }

    /// Decodes a token, verifying signature, issuer, audience and lifetime
    /// with zero clock-skew tolerance
    fn decode_checked(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| BlogGateError::AuthError(format!("Invalid token: {}", e)))?;

        // The library accepts exp == now; the boundary second is invalid here
        if claims.is_expired() {
            return Err(BlogGateError::AuthError("Token expired".to_string()));
        }

        Ok(claims)
    }
}

/// Extracts the token from an Authorization header of the form
/// `"Bearer <token>"`. Anything else yields `None`.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix(BEARER_PREFIX)
}
