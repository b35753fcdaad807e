//! Bearer token check endpoint and the admin gate for protected routes
//!
//! The warp filter below is the in-process stand-in for the gateway
//! authorizer: it runs the same token validation the external gateway
//! would and rejects with 401 instead of emitting a policy document.

use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::response::empty_reply;
use crate::auth::token::{extract_bearer_token, TokenManager};
use crate::auth::user::UserRole;

/// Rejection raised when a protected route sees no valid admin token
#[derive(Debug)]
pub struct Unauthorized;

impl warp::reject::Reject for Unauthorized {}

/// GET /api/auth: reports whether the presented bearer token grants
/// admin access. 200 on success, 401 on any validation failure.
pub async fn handle_auth_check(
    token_manager: Arc<TokenManager>,
    auth_header: Option<String>,
) -> Result<impl Reply, Infallible> {
    let claims = auth_header
        .as_deref()
        .and_then(extract_bearer_token)
        .and_then(|token| token_manager.validate(token, UserRole::Admin));

    match claims {
        Some(_) => Ok(empty_reply(StatusCode::OK)),
        None => Ok(empty_reply(StatusCode::UNAUTHORIZED)),
    }
}

/// Filter guarding protected routes: the request proceeds only when the
/// Authorization header carries a valid admin token.
pub fn require_admin(
    token_manager: Arc<TokenManager>,
) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and_then(move |auth_header: Option<String>| {
            let token_manager = token_manager.clone();
            async move {
                auth_header
                    .as_deref()
                    .and_then(extract_bearer_token)
                    .and_then(|token| token_manager.validate(token, UserRole::Admin))
                    .map(|_claims| ())
                    .ok_or_else(|| warp::reject::custom(Unauthorized))
            }
        })
        .untuple_one()
}

/// Maps rejections to JSON replies. Gate failures become 401; everything
/// unexpected becomes 500 after logging.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.find::<Unauthorized>().is_some() {
        Ok(empty_reply(StatusCode::UNAUTHORIZED))
    } else if err.is_not_found() {
        Ok(empty_reply(StatusCode::NOT_FOUND))
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        Ok(empty_reply(StatusCode::BAD_REQUEST))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        Ok(empty_reply(StatusCode::METHOD_NOT_ALLOWED))
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        Ok(empty_reply(StatusCode::INTERNAL_SERVER_ERROR))
    }
}
