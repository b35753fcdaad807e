//! JSON reply helpers shared by all handlers
//!
//! Every response body is JSON; serialization settings live on the
//! individual types, never in process-global state.

use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{json, with_status, Json, WithStatus};

/// Message-only body for error and status replies
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// A JSON body with an explicit status code
pub fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> WithStatus<Json> {
    with_status(json(body), status)
}

/// A `{ "message": ... }` body with an explicit status code
pub fn message_reply(message: &str, status: StatusCode) -> WithStatus<Json> {
    json_reply(
        &MessageBody {
            message: message.to_string(),
        },
        status,
    )
}

/// An empty `{}` body carrying only a status code
pub fn empty_reply(status: StatusCode) -> WithStatus<Json> {
    json_reply(&serde_json::json!({}), status)
}
