use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token cookie was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing access token")]
    MissingToken,

    /// The access token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The refresh token cookie is missing, unknown, expired, or revoked.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Refresh token is not valid")]
    InvalidRefreshToken,

    /// Login attempt with a wrong username or password.
    ///
    /// Results in a 401 Unauthorized response with a deliberately vague
    /// message so the two cases cannot be told apart.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A token referenced a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permissions required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is logged but not
    /// returned to the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Registration attempted with a username or email already in use.
    ///
    /// Results in a 409 Conflict response naming the offending field.
    #[error("{0} is already taken")]
    AlreadyTaken(&'static str),

    /// Password hashing or verification failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential failures all map to 401 Unauthorized so the client's
/// refresh interceptor can react uniformly. Permission failures map to 403,
/// duplicate registrations to 409, and hashing failures to a generic 500.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::InvalidRefreshToken
            | Self::UserNotInDatabase(_) => {
                tracing::debug!("Unauthorized request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AlreadyTaken(field) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("{} is already taken", field),
                }),
            )
                .into_response(),
            Self::PasswordHash(msg) => {
                tracing::error!("Password hashing error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
