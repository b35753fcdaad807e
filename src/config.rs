//! Server configuration module
//! Handles startup configuration for the blog API and its token authority

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOKEN_TTL_SECS};
use crate::error::{BlogGateError, Result};
use std::env;

/// Token authority configuration: everything issue/validate needs.
/// Loaded once at process start and immutable afterwards, so it is safe
/// to share across concurrent requests without synchronization.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token issuer (`iss` claim)
    pub issuer: String,
    /// Token audience (`aud` claim)
    pub audience: String,
    /// HMAC signing secret
    pub secret: String,
    /// Token time-to-live in seconds
    pub token_ttl_secs: u64,
}

/// Server configuration parameters
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        panic!("ServerConfig::default() is not allowed for security reasons. Use ServerConfig::from_env() instead.");
    }
}

impl AuthConfig {
    /// Create a test configuration - DANGEROUS: Only for testing!
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            issuer: "blog-gate-tests".to_string(),
            audience: "blog-gate-test-clients".to_string(),
            secret: "unit-test-signing-secret-never-use-in-production".to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Validate that the signing secret meets security requirements
    fn validate_secret(secret: &str) -> Result<()> {
        if secret.len() < 32 {
            return Err(BlogGateError::ConfigError(
                "Signing secret must be at least 32 characters long".to_string(),
            ));
        }

        // Check for insecure default or example values
        let insecure_patterns = [
            "your-secret-key",
            "change-this",
            "test-secret",
            "default",
            "secret",
            "password",
            "12345",
        ];

        for pattern in &insecure_patterns {
            if secret.contains(pattern) {
                return Err(BlogGateError::ConfigError(format!(
                    "Signing secret contains insecure pattern '{}'. Please use a secure random secret generated with: openssl rand -base64 32",
                    pattern
                )));
            }
        }

        Ok(())
    }

    /// Load token authority settings from environment variables
    pub fn from_env() -> Result<Self> {
        let issuer = env::var("BLOG_GATE_ISSUER")
            .or_else(|_| env::var("ISSUER"))
            .map_err(|_| {
                BlogGateError::ConfigError(
                    "ISSUER environment variable is required for token issuance".to_string(),
                )
            })?;

        let audience = env::var("BLOG_GATE_AUDIENCE")
            .or_else(|_| env::var("AUDIENCE"))
            .map_err(|_| {
                BlogGateError::ConfigError(
                    "AUDIENCE environment variable is required for token issuance".to_string(),
                )
            })?;

        let secret = env::var("BLOG_GATE_SECRET")
            .or_else(|_| env::var("SECRET"))
            .map_err(|_| {
                BlogGateError::ConfigError(
                    "SECRET environment variable is required for security. \
                     Generate one with: openssl rand -base64 32"
                        .to_string(),
                )
            })?;

        // Absent or unparsable TTL falls back to the default
        let token_ttl_secs = env::var("BLOG_GATE_EXPIRE_SECONDS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Self::validate_secret(&secret)?;

        Ok(Self {
            issuer,
            audience,
            secret,
            token_ttl_secs,
        })
    }
}

impl ServerConfig {
    /// Load configuration from environment variables if available
    pub fn from_env() -> Result<Self> {
        let host = env::var("BLOG_GATE_HOST").unwrap_or(DEFAULT_HOST.to_string());
        let port = env::var("BLOG_GATE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let auth = AuthConfig::from_env()?;

        Ok(Self { host, port, auth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "ServerConfig::default() is not allowed for security reasons")]
    fn test_default_panics() {
        let _ = ServerConfig::default();
    }

    #[test]
    fn test_from_env_requires_secret() {
        // Clear any existing env vars
        env::remove_var("BLOG_GATE_ISSUER");
        env::remove_var("ISSUER");
        env::remove_var("BLOG_GATE_AUDIENCE");
        env::remove_var("AUDIENCE");
        env::remove_var("BLOG_GATE_SECRET");
        env::remove_var("SECRET");

        let result = AuthConfig::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ISSUER"));
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AuthConfig::validate_secret("too-short");
        assert!(result.is_err());
    }

    #[test]
    fn test_insecure_secret_pattern_rejected() {
        let result = AuthConfig::validate_secret("change-this-change-this-change-this-now");
        assert!(result.is_err());
    }

    #[test]
    fn test_for_testing_has_default_ttl() {
        let config = AuthConfig::for_testing();
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert!(config.issuer.contains("test"));
    }
}
