//! In-memory storage implementation for development and testing
//!
//! Keeps all records in process memory behind async RwLocks. Suitable
//! for development, tests, or single-instance deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::{AccountStore, BlogStore};
use crate::error::Result;
use crate::models::account::Account;
use crate::models::blog::Blog;

/// In-memory account storage keyed by lowercase email
pub struct MemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn put_account(&self, account: Account) -> Result<()> {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account);
        Ok(())
    }

    async fn find_account(&self, email: &str) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    async fn delete_account(&self, email: &str) -> Result<()> {
        self.accounts.write().await.remove(email);
        Ok(())
    }
}

/// In-memory blog post storage keyed by permalink
pub struct MemoryBlogStore {
    posts: Arc<RwLock<HashMap<String, Blog>>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn put_post(&self, post: Blog) -> Result<()> {
        self.posts
            .write()
            .await
            .insert(post.permalink.clone(), post);
        Ok(())
    }

    async fn get_post(&self, permalink: &str) -> Result<Option<Blog>> {
        Ok(self.posts.read().await.get(permalink).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Blog>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn delete_post(&self, permalink: &str) -> Result<()> {
        self.posts.write().await.remove(permalink);
        Ok(())
    }
}
