//! Breed factory for creating test character breed entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a breed with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::breed::Model)` - Created breed entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_breed(db: &DatabaseConnection) -> Result<entity::breed::Model, DbErr> {
    create_breed_with_name(db, format!("Breed {}", next_id())).await
}

/// Creates a breed with a specific name.
pub async fn create_breed_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::breed::Model, DbErr> {
    entity::breed::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
