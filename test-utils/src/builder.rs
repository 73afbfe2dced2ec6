use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder assembling the schema for an in-memory test database.
///
/// Add the entities a test needs with `with_table()` (or one of the grouped
/// helpers below), then call `build()`:
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Character)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Derives a CREATE TABLE statement from the entity and queues it.
    ///
    /// Add tables in dependency order so foreign keys resolve: referenced
    /// tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues the tables needed for authentication tests: `User` and
    /// `RefreshToken`.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(RefreshToken)
    }

    /// Queues everything events, teams, and comments touch.
    ///
    /// Pulls in the whole reference hierarchy (servers, breeds, tags) since
    /// both events and characters hang off it.
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(Server)
            .with_table(Breed)
            .with_table(Tag)
            .with_table(Character)
            .with_table(Event)
            .with_table(EventCharacter)
            .with_table(Comment)
    }

    /// Opens the in-memory database and creates all queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
