//! Entities and wire DTOs for the blog API

pub mod account;
pub mod blog;

// Re-export main components
pub use account::{Account, AccountProfile, NewAccount};
pub use blog::Blog;
