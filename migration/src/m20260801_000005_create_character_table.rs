use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_server_table::Server,
    m20260801_000003_create_breed_table::Breed,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer(Character::UserId))
                    .col(integer(Character::ServerId))
                    .col(integer(Character::BreedId))
                    .col(string(Character::Name))
                    .col(integer(Character::Level).default(1))
                    .col(
                        timestamp(Character::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_user_id")
                            .from(Character::Table, Character::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_server_id")
                            .from(Character::Table, Character::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_breed_id")
                            .from(Character::Table, Character::BreedId)
                            .to(Breed::Table, Breed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A player may not reuse a character name on the same server.
        manager
            .create_index(
                Index::create()
                    .name("idx_character_server_name")
                    .table(Character::Table)
                    .col(Character::ServerId)
                    .col(Character::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    UserId,
    ServerId,
    BreedId,
    Name,
    Level,
    CreatedAt,
}
