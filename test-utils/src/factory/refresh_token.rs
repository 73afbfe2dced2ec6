//! Refresh token factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a valid (unexpired, unrevoked) refresh token for a user.
///
/// The stored hash is `"token-hash-{id}"` with an auto-incremented id, so
/// tests that need a specific hash should use
/// [`create_refresh_token_with_hash`] instead.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the session
///
/// # Returns
/// - `Ok(entity::refresh_token::Model)` - Created refresh token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_refresh_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::refresh_token::Model, DbErr> {
    create_refresh_token_with_hash(db, user_id, format!("token-hash-{}", next_id())).await
}

/// Creates a valid refresh token with a specific stored hash.
pub async fn create_refresh_token_with_hash(
    db: &DatabaseConnection,
    user_id: i32,
    token_hash: impl Into<String>,
) -> Result<entity::refresh_token::Model, DbErr> {
    entity::refresh_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token_hash: ActiveValue::Set(token_hash.into()),
        expires_at: ActiveValue::Set(Utc::now() + Duration::days(7)),
        created_at: ActiveValue::Set(Utc::now()),
        revoked: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an already-expired refresh token for a user.
pub async fn create_expired_refresh_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::refresh_token::Model, DbErr> {
    entity::refresh_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token_hash: ActiveValue::Set(format!("token-hash-{}", next_id())),
        expires_at: ActiveValue::Set(Utc::now() - Duration::days(1)),
        created_at: ActiveValue::Set(Utc::now() - Duration::days(8)),
        revoked: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
