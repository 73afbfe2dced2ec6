use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Breed::Table)
                    .if_not_exists()
                    .col(pk_auto(Breed::Id))
                    .col(string_uniq(Breed::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Breed::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Breed {
    Table,
    Id,
    Name,
}
