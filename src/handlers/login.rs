//! Login endpoint handler

use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

use super::response::{empty_reply, json_reply, message_reply};
use crate::auth::login::{LoginError, LoginRequest, LoginService};

/// POST /api/login: verifies the submitted credentials and returns a
/// fresh bearer token.
///
/// Unknown accounts and credential mismatches both surface as 404 so the
/// response does not reveal whether the email exists. Issuance failures
/// surface as 500.
pub async fn handle_login(
    service: Arc<LoginService>,
    request: LoginRequest,
) -> Result<impl Reply, Infallible> {
    match service.login(&request).await {
        Ok(success) => Ok(json_reply(&success, StatusCode::OK)),
        Err(LoginError::NotFound) => {
            log::debug!("Login rejected: unknown account");
            Ok(empty_reply(StatusCode::NOT_FOUND))
        }
        Err(LoginError::Mismatch) => {
            Ok(message_reply("Password mismatches.", StatusCode::NOT_FOUND))
        }
        Err(LoginError::Internal(e)) => {
            log::error!("Login failed: {}", e);
            Ok(message_reply(
                "Token issuance failed",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
