use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, EventFilter, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            creator_id: ActiveValue::Set(params.creator_id),
            server_id: ActiveValue::Set(params.server_id),
            tag_id: ActiveValue::Set(params.tag_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            event_time: ActiveValue::Set(params.event_time),
            max_slots: ActiveValue::Set(params.max_slots),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets paginated upcoming events ordered by event_time (soonest first),
    /// optionally filtered by server and tag.
    ///
    /// # Returns
    /// - `Ok((events, total))`: Page of events and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        filter: EventFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::event::Model>, u64), DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::EventTime.gte(Utc::now()))
            .order_by_asc(entity::event::Column::EventTime);

        if let Some(server_id) = filter.server_id {
            query = query.filter(entity::event::Column::ServerId.eq(server_id));
        }
        if let Some(tag_id) = filter.tag_id {
            query = query.filter(entity::event::Column::TagId.eq(tag_id));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(page).await?;

        Ok((events, total))
    }

    /// Updates an event's mutable fields.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated event
    /// - `Err(DbErr::RecordNotFound)`: No event with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(event_time) = params.event_time {
            active_model.event_time = ActiveValue::Set(event_time);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(max_slots) = params.max_slots {
            active_model.max_slots = ActiveValue::Set(max_slots);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a character to an event's team.
    pub async fn add_character(&self, event_id: i32, character_id: i32) -> Result<(), DbErr> {
        entity::event_character::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            character_id: ActiveValue::Set(character_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a character from an event's team.
    ///
    /// # Returns
    /// - `Ok(true)`: The team row was deleted
    /// - `Ok(false)`: The character was not on the team
    pub async fn remove_character(&self, event_id: i32, character_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventCharacter::delete_many()
            .filter(entity::event_character::Column::EventId.eq(event_id))
            .filter(entity::event_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_character_joined(
        &self,
        event_id: i32,
        character_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::EventCharacter::find()
            .filter(entity::event_character::Column::EventId.eq(event_id))
            .filter(entity::event_character::Column::CharacterId.eq(character_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn team_count(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventCharacter::find()
            .filter(entity::event_character::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Gets an event's team with each character's breed and owning user.
    ///
    /// # Returns
    /// - `Ok(members)`: Tuples of (character, breed, owner), one per team row
    /// - `Err(DbErr)`: Database error
    pub async fn get_team(
        &self,
        event_id: i32,
    ) -> Result<
        Vec<(
            entity::character::Model,
            entity::breed::Model,
            entity::user::Model,
        )>,
        DbErr,
    > {
        let rows = entity::prelude::EventCharacter::find()
            .filter(entity::event_character::Column::EventId.eq(event_id))
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        let mut members = Vec::new();

        for (_link, character) in rows {
            let Some(character) = character else {
                continue;
            };

            let breed = entity::prelude::Breed::find_by_id(character.breed_id)
                .one(self.db)
                .await?
                .ok_or(DbErr::RecordNotFound(format!(
                    "Breed {} not found",
                    character.breed_id
                )))?;

            let owner = entity::prelude::User::find_by_id(character.user_id)
                .one(self.db)
                .await?
                .ok_or(DbErr::RecordNotFound(format!(
                    "User {} not found",
                    character.user_id
                )))?;

            members.push((character, breed, owner));
        }

        Ok(members)
    }
}
