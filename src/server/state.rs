//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields use
//! cheap-to-clone types: `DatabaseConnection` is a connection pool, the
//! moderation filter shares its word list behind an `Arc`, and the token
//! configuration is a small owned struct.

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenConfig, moderation::ModerationFilter};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing configuration for access and refresh tokens.
    pub tokens: TokenConfig,

    /// Profanity filter applied to user-authored content.
    pub moderation: ModerationFilter,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenConfig, moderation: ModerationFilter) -> Self {
        Self {
            db,
            tokens,
            moderation,
        }
    }
}
