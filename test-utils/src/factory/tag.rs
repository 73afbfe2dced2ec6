//! Tag factory for creating test event tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_tag_with_name(db, format!("Tag {}", next_id())).await
}

/// Creates a tag with a specific name.
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
