use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BlogGateError {
    // Configuration errors
    ConfigError(String),

    // Auth errors
    AuthError(String),

    // Storage errors
    StorageError(String),
    NotFound(String),
}

impl fmt::Display for BlogGateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::AuthError(msg) => write!(f, "Authentication error: {}", msg),
            Self::StorageError(msg) => write!(f, "Storage error: {}", msg),
            Self::NotFound(id) => write!(f, "Not found: {}", id),
        }
    }
}

impl Error for BlogGateError {}

// Generic result type for Blog Gate
pub type Result<T> = std::result::Result<T, BlogGateError>;
