//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on an event with default content.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the comment belongs to
/// - `user_id` - Author of the comment
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    create_comment_with_content(db, event_id, user_id, format!("Comment {}", next_id())).await
}

/// Creates a comment with specific content.
pub async fn create_comment_with_content(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    content: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
