use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub server_id: i32,
    pub breed_id: i32,
    pub name: String,
    pub level: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Server,
    #[sea_orm(
        belongs_to = "super::breed::Entity",
        from = "Column::BreedId",
        to = "super::breed::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Breed,
    #[sea_orm(has_many = "super::event_character::Entity")]
    EventCharacter,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl Related<super::breed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Breed.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_character::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_character::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
