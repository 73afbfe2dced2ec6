use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000005_create_character_table::Character, m20260801_000006_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCharacter::Table)
                    .if_not_exists()
                    .col(integer(EventCharacter::EventId))
                    .col(integer(EventCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(EventCharacter::EventId)
                            .col(EventCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_character_event_id")
                            .from(EventCharacter::Table, EventCharacter::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_character_character_id")
                            .from(EventCharacter::Table, EventCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventCharacter {
    Table,
    EventId,
    CharacterId,
}
