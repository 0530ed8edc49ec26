use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// E-mail unknown or password mismatch during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user is authenticated but lacks the required permission.
    ///
    /// Holds the user ID and a description of the denied action for logging.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while keeping client-facing messages
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Not authorized to access this route",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
