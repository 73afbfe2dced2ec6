//! Cross-factory helpers: unique IDs and dependency-chain creation.

use sea_orm::{DatabaseConnection, DbErr};

// Shared across every factory so names never collide within a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next unique suffix for generated test names.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts a creator user, a server, a tag, and an event wired to all three.
///
/// Everything uses default values. Reach for the individual factories when a
/// test needs to customize one of the rows.
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::server::Model,
        entity::tag::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let server = crate::factory::server::create_server(db).await?;
    let tag = crate::factory::tag::create_tag(db).await?;
    let event = crate::factory::event::create_event(db, user.id, server.id, tag.id).await?;

    Ok((user, server, tag, event))
}

/// Inserts a fresh server and breed, then a character owned by `user` on
/// that server. Handy for team membership tests.
pub async fn create_character_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<
    (
        entity::server::Model,
        entity::breed::Model,
        entity::character::Model,
    ),
    DbErr,
> {
    let server = crate::factory::server::create_server(db).await?;
    let breed = crate::factory::breed::create_breed(db).await?;
    let character =
        crate::factory::character::create_character(db, user.id, server.id, breed.id).await?;

    Ok((server, breed, character))
}
