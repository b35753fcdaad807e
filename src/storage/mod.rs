//! Storage backends for accounts and blog posts

pub mod memory;
pub mod traits;

// Re-export main components
pub use memory::{MemoryAccountStore, MemoryBlogStore};
pub use traits::{AccountStore, BlogStore, SharedAccountStore, SharedBlogStore};
