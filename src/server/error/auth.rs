use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected endpoint.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, expiry or algorithm verification.
    #[error("Token verification failed: {0}")]
    InvalidToken(String),

    /// Login failed because the email is unknown, the password does not match, or the
    /// account is not active. The cause is only logged, never returned to the client.
    #[error("Login rejected: {0}")]
    InvalidCredentials(String),

    /// Authenticated user lacks the role an endpoint requires.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token refers to a user that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with one generic message for every cause
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
