//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db, user.id, server.id, breed.id)
///     .name("Kara-Iop")
///     .level(180)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    server_id: i32,
    breed_id: i32,
    name: String,
    level: i32,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - level: `100`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, server_id: i32, breed_id: i32) -> Self {
        Self {
            db,
            user_id,
            server_id,
            breed_id,
            name: format!("Character {}", next_id()),
            level: 100,
        }
    }

    /// Sets the character's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the character's level.
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            server_id: ActiveValue::Set(self.server_id),
            breed_id: ActiveValue::Set(self.breed_id),
            name: ActiveValue::Set(self.name),
            level: ActiveValue::Set(self.level),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db, user_id, server_id, breed_id).build().await`.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
    server_id: i32,
    breed_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id, server_id, breed_id)
        .build()
        .await
}
