use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::character::{CreateCharacterParams, UpdateCharacterParams};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character for a user.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created character
    /// - `Err(DbErr)`: Database error, including the unique name-per-server
    ///   constraint violation
    pub async fn create(
        &self,
        params: CreateCharacterParams,
    ) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            server_id: ActiveValue::Set(params.server_id),
            breed_id: ActiveValue::Set(params.breed_id),
            name: ActiveValue::Set(params.name),
            level: ActiveValue::Set(params.level),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(id).one(self.db).await
    }

    /// Gets all characters belonging to a user, ordered by name.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Looks up a character by name on a server, used for duplicate-name
    /// detection before hitting the unique index.
    pub async fn find_by_server_and_name(
        &self,
        server_id: i32,
        name: &str,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::ServerId.eq(server_id))
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Updates a character's mutable fields.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated character
    /// - `Err(DbErr::RecordNotFound)`: No character with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCharacterParams,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Character {} not found", id)))?;

        let mut active_model: entity::character::ActiveModel = character.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(level) = params.level {
            active_model.level = ActiveValue::Set(level);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
