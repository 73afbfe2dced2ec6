//! Application error hierarchy and HTTP response mapping.
//!
//! `AppError` is the top-level error type returned by controllers and
//! services. It implements `IntoResponse` so handlers can return
//! `Result<_, AppError>` directly and get a JSON error body with the right
//! status code.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Startup or environment configuration failure. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure. `AuthError` picks its own
    /// status code (401, 403, ...).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database failure. Logged server-side, reported as a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The requested resource does not exist. 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// The request was well-formed but semantically invalid. 400 with the
    /// message.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with existing state, e.g. a duplicate unique
    /// value. 409 with the message.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected server-side failure. The message is logged, the client
    /// only sees a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        fn body(status: StatusCode, message: String) -> Response {
            (status, Json(ErrorDto { error: message })).into_response()
        }

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => body(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => body(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => body(StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => {
                tracing::error!("{}", err);
                body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
