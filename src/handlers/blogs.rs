//! Blog post CRUD handlers
//!
//! Reads are public; writes sit behind the admin gate wired in the
//! server binary.

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Reply;

use super::response::{empty_reply, json_reply, message_reply};
use crate::models::blog::Blog;
use crate::storage::traits::SharedBlogStore;

/// GET /api/blogs: all posts, newest first
pub async fn handle_list_posts(store: SharedBlogStore) -> Result<impl Reply, Infallible> {
    match store.list_posts().await {
        Ok(mut posts) => {
            posts.sort_by(|a, b| b.created.cmp(&a.created));
            Ok(json_reply(&posts, StatusCode::OK))
        }
        Err(e) => {
            log::error!("Failed to list posts: {}", e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// GET /api/blogs/{permalink}
pub async fn handle_get_post(
    permalink: String,
    store: SharedBlogStore,
) -> Result<impl Reply, Infallible> {
    match store.get_post(&permalink).await {
        Ok(Some(post)) => Ok(json_reply(&post, StatusCode::OK)),
        Ok(None) => Ok(empty_reply(StatusCode::NOT_FOUND)),
        Err(e) => {
            log::error!("Failed to load post {}: {}", permalink, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// POST /api/blogs: stores a post, stamping its creation time and
/// generating a permalink when the submission carries none. Echoes the
/// stored post.
pub async fn handle_add_post(
    store: SharedBlogStore,
    mut post: Blog,
) -> Result<impl Reply, Infallible> {
    if post.permalink.is_empty() {
        post.permalink = uuid::Uuid::new_v4().to_string();
    }
    post.created = chrono::Utc::now();

    log::info!("Saving post with permalink {}", post.permalink);
    match store.put_post(post.clone()).await {
        Ok(()) => Ok(json_reply(&post, StatusCode::OK)),
        Err(e) => {
            log::error!("Failed to save post {}: {}", post.permalink, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// DELETE /api/blogs/{permalink}: 202 Accepted whether or not the post
/// existed
pub async fn handle_remove_post(
    permalink: String,
    store: SharedBlogStore,
) -> Result<impl Reply, Infallible> {
    log::info!("Deleting post with permalink {}", permalink);
    match store.delete_post(&permalink).await {
        Ok(()) => Ok(empty_reply(StatusCode::ACCEPTED)),
        Err(e) => {
            log::error!("Failed to delete post {}: {}", permalink, e);
            Ok(message_reply(
                "Storage failure",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
