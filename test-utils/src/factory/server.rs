//! Server factory for creating test game server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::server::Model)` - Created server entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    create_server_with_name(db, format!("Server {}", next_id())).await
}

/// Creates a server with a specific name.
pub async fn create_server_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::server::Model, DbErr> {
    entity::server::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
