//! Abstract storage interfaces for pluggable backends
//!
//! The auth core consumes `AccountStore` as its lookup collaborator;
//! the blog handlers consume `BlogStore`. Implementations own their
//! persistence details entirely.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::account::Account;
use crate::models::blog::Blog;

/// Account record storage interface
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Store an account, replacing any record under the same email
    async fn put_account(&self, account: Account) -> Result<()>;

    /// Look up an account by its lowercase email
    async fn find_account(&self, email: &str) -> Result<Option<Account>>;

    /// List all accounts
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Remove an account. Removing an absent account is not an error.
    async fn delete_account(&self, email: &str) -> Result<()>;
}

/// Blog post storage interface
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Store a post, replacing any record under the same permalink
    async fn put_post(&self, post: Blog) -> Result<()>;

    /// Look up a post by permalink
    async fn get_post(&self, permalink: &str) -> Result<Option<Blog>>;

    /// List all posts, unordered; callers apply their own ordering
    async fn list_posts(&self) -> Result<Vec<Blog>>;

    /// Remove a post. Removing an absent post is not an error.
    async fn delete_post(&self, permalink: &str) -> Result<()>;
}

pub type SharedAccountStore = Arc<dyn AccountStore>;
pub type SharedBlogStore = Arc<dyn BlogStore>;
