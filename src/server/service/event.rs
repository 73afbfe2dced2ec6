use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        comment::CommentDto,
        event::{
            CreateEventDto, EventDto, EventListItemDto, PaginatedEventsDto, TeamMemberDto,
            UpdateEventDto,
        },
    },
    server::{
        data::{
            character::CharacterRepository,
            comment::CommentRepository,
            event::EventRepository,
            reference::{ServerRepository, TagRepository},
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::event::{CreateEventParams, EventFilter, UpdateEventParams},
        service::moderation::ModerationFilter,
    },
};

/// Wire format for event times, UTC.
const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    moderation: &'a ModerationFilter,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, moderation: &'a ModerationFilter) -> Self {
        Self { db, moderation }
    }

    /// Creates a new event.
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The created event with enriched data
    /// - `Err(AppError::BadRequest)`: Invalid time, past time, unknown
    ///   server/tag, or content rejected by moderation
    pub async fn create(
        &self,
        creator_id: i32,
        dto: CreateEventDto,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);

        let event_time = Self::parse_event_time(&dto.event_time)?;

        if event_time <= Utc::now() {
            return Err(AppError::BadRequest(
                "Event time must be in the future".to_string(),
            ));
        }
        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        if let Some(max_slots) = dto.max_slots {
            if max_slots < 1 {
                return Err(AppError::BadRequest(
                    "max_slots must be at least 1".to_string(),
                ));
            }
        }

        self.check_content(&dto.title)?;
        if let Some(description) = &dto.description {
            self.check_content(description)?;
        }

        ServerRepository::new(self.db)
            .find_by_id(dto.server_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown server".to_string()))?;
        TagRepository::new(self.db)
            .find_by_id(dto.tag_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown tag".to_string()))?;

        let event = repo
            .create(CreateEventParams {
                creator_id,
                server_id: dto.server_id,
                tag_id: dto.tag_id,
                title: dto.title,
                description: dto.description,
                event_time,
                max_slots: dto.max_slots,
            })
            .await?;

        self.get_by_id(event.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found after creation".to_string()))
    }

    /// Gets an event by ID with team members and comments.
    ///
    /// # Returns
    /// - `Ok(Some(EventDto))`: The event with enriched data
    /// - `Ok(None)`: Event not found
    /// - `Err(AppError)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventDto>, AppError> {
        let repo = EventRepository::new(self.db);

        let Some(event) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let (creator_name, server_name, tag_name) = self.names_for(&event).await?;

        let team = repo
            .get_team(id)
            .await?
            .into_iter()
            .map(|(character, breed, owner)| TeamMemberDto {
                character_id: character.id,
                character_name: character.name,
                level: character.level,
                breed_name: breed.name,
                owner_id: owner.id,
                owner_name: owner.username,
            })
            .collect();

        let comments = CommentRepository::new(self.db)
            .get_by_event(id)
            .await?
            .into_iter()
            .filter_map(|(comment, author)| {
                author.map(|author| CommentDto {
                    id: comment.id,
                    event_id: comment.event_id,
                    user_id: comment.user_id,
                    username: author.username,
                    content: comment.content,
                    created_at: comment.created_at,
                })
            })
            .collect();

        Ok(Some(EventDto {
            id: event.id,
            creator_id: event.creator_id,
            creator_name,
            server_id: event.server_id,
            server_name,
            tag_id: event.tag_id,
            tag_name,
            title: event.title,
            description: event.description,
            event_time: event.event_time,
            max_slots: event.max_slots,
            team,
            comments,
            created_at: event.created_at,
        }))
    }

    /// Gets paginated upcoming events with enriched listing data.
    pub async fn get_paginated(
        &self,
        filter: EventFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedEventsDto, AppError> {
        let repo = EventRepository::new(self.db);

        let (events, total) = repo.get_paginated(filter, page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        let mut event_list = Vec::with_capacity(events.len());

        for event in events {
            let (creator_name, server_name, tag_name) = self.names_for(&event).await?;
            let team_size = repo.team_count(event.id).await?;

            event_list.push(EventListItemDto {
                id: event.id,
                creator_id: event.creator_id,
                creator_name,
                server_id: event.server_id,
                server_name,
                tag_id: event.tag_id,
                tag_name,
                title: event.title,
                event_time: event.event_time,
                team_size,
                max_slots: event.max_slots,
            });
        }

        Ok(PaginatedEventsDto {
            events: event_list,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates an event. Only the creator or an admin may update.
    pub async fn update(
        &self,
        event_id: i32,
        caller: &entity::user::Model,
        dto: UpdateEventDto,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.creator_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(
                caller.id,
                "User is not allowed to update this event".to_string(),
            )
            .into());
        }

        if let Some(title) = &dto.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("Title must not be empty".to_string()));
            }
            self.check_content(title)?;
        }
        if let Some(Some(description)) = &dto.description {
            self.check_content(description)?;
        }

        let event_time = match &dto.event_time {
            Some(raw) => Some(Self::parse_event_time(raw)?),
            None => None,
        };

        repo.update(
            event_id,
            UpdateEventParams {
                title: dto.title,
                event_time,
                description: dto.description,
                max_slots: dto.max_slots,
            },
        )
        .await?;

        self.get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Deletes an event. Only the creator or an admin may delete.
    pub async fn delete(
        &self,
        event_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.creator_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(
                caller.id,
                "User is not allowed to delete this event".to_string(),
            )
            .into());
        }

        repo.delete(event_id).await?;

        Ok(())
    }

    /// Adds one of the caller's characters to an event's team.
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The event with the updated team
    /// - `Err(AppError::BadRequest)`: Character on another server, already
    ///   joined, or the event is full
    /// - `Err(AppError::AuthErr)`: Character belongs to another user
    pub async fn join(
        &self,
        event_id: i32,
        caller: &entity::user::Model,
        character_id: i32,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let character = CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        if character.user_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                "Character belongs to another user".to_string(),
            )
            .into());
        }
        if character.server_id != event.server_id {
            return Err(AppError::BadRequest(
                "Character is not on the event's server".to_string(),
            ));
        }
        if repo.is_character_joined(event_id, character_id).await? {
            return Err(AppError::BadRequest(
                "Character has already joined this event".to_string(),
            ));
        }
        if let Some(max_slots) = event.max_slots {
            if repo.team_count(event_id).await? >= max_slots as u64 {
                return Err(AppError::BadRequest("Event is full".to_string()));
            }
        }

        repo.add_character(event_id, character_id).await?;

        self.get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Removes one of the caller's characters from an event's team. Admins
    /// may remove any character.
    pub async fn leave(
        &self,
        event_id: i32,
        caller: &entity::user::Model,
        character_id: i32,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);

        repo.find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let character = CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        if character.user_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(
                caller.id,
                "Character belongs to another user".to_string(),
            )
            .into());
        }

        if !repo.remove_character(event_id, character_id).await? {
            return Err(AppError::BadRequest(
                "Character is not on this event's team".to_string(),
            ));
        }

        self.get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Parses an event time from "YYYY-MM-DD HH:MM" format, interpreted as UTC.
    fn parse_event_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
        let naive = NaiveDateTime::parse_from_str(raw, EVENT_TIME_FORMAT).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid event time '{}', expected YYYY-MM-DD HH:MM",
                raw
            ))
        })?;

        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    fn check_content(&self, text: &str) -> Result<(), AppError> {
        if let Some(word) = self.moderation.find_banned_word(text) {
            return Err(AppError::BadRequest(format!(
                "Content contains a banned word: {}",
                word
            )));
        }

        Ok(())
    }

    async fn names_for(
        &self,
        event: &entity::event::Model,
    ) -> Result<(String, String, String), AppError> {
        let creator = UserRepository::new(self.db)
            .find_by_id(event.creator_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Creator not found".to_string()))?;
        let server = ServerRepository::new(self.db)
            .find_by_id(event.server_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;
        let tag = TagRepository::new(self.db)
            .find_by_id(event.tag_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

        Ok((creator.username, server.name, tag.name))
    }
}
