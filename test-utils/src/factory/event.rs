//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, user.id, server.id, tag.id)
///     .title("Crocodyl dungeon run")
///     .max_slots(4)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    server_id: i32,
    tag_id: i32,
    title: String,
    description: Option<String>,
    event_time: chrono::DateTime<Utc>,
    max_slots: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - description: `None`
    /// - event_time: one day in the future
    /// - max_slots: `None` (unlimited)
    pub fn new(db: &'a DatabaseConnection, creator_id: i32, server_id: i32, tag_id: i32) -> Self {
        Self {
            db,
            creator_id,
            server_id,
            tag_id,
            title: format!("Event {}", next_id()),
            description: None,
            event_time: Utc::now() + Duration::days(1),
            max_slots: None,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the scheduled event time.
    pub fn event_time(mut self, event_time: chrono::DateTime<Utc>) -> Self {
        self.event_time = event_time;
        self
    }

    /// Sets the team size limit.
    pub fn max_slots(mut self, max_slots: i32) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            creator_id: ActiveValue::Set(self.creator_id),
            server_id: ActiveValue::Set(self.server_id),
            tag_id: ActiveValue::Set(self.tag_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            event_time: ActiveValue::Set(self.event_time),
            max_slots: ActiveValue::Set(self.max_slots),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
///
/// Shorthand for `EventFactory::new(db, creator_id, server_id, tag_id).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    creator_id: i32,
    server_id: i32,
    tag_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, creator_id, server_id, tag_id)
        .build()
        .await
}
