//! Blog Gate - a token-gated blog API implemented in Rust
//!
//! This library provides credential verification, bearer-token issuance
//! and validation, and the allow/deny authorization decision used to
//! gate the blog CRUD surface.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

// Re-export main components
pub use config::*;
pub use constants::*;
