//! HTTP request handlers for the blog API

pub mod authorize;
pub mod blogs;
pub mod login;
pub mod response;
pub mod users;
