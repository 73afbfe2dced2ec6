pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_server_table;
mod m20260801_000003_create_breed_table;
mod m20260801_000004_create_tag_table;
mod m20260801_000005_create_character_table;
mod m20260801_000006_create_event_table;
mod m20260801_000007_create_event_character_table;
mod m20260801_000008_create_comment_table;
mod m20260801_000009_create_refresh_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_server_table::Migration),
            Box::new(m20260801_000003_create_breed_table::Migration),
            Box::new(m20260801_000004_create_tag_table::Migration),
            Box::new(m20260801_000005_create_character_table::Migration),
            Box::new(m20260801_000006_create_event_table::Migration),
            Box::new(m20260801_000007_create_event_character_table::Migration),
            Box::new(m20260801_000008_create_comment_table::Migration),
            Box::new(m20260801_000009_create_refresh_token_table::Migration),
        ]
    }
}
