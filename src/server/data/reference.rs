//! Repositories for the reference-data tables: game servers, character
//! breeds, and event tags. All three share the same id/name shape, so the
//! repositories are deliberately uniform.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::server::Model>, DbErr> {
        entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find()
            .filter(entity::server::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Server::find().count(self.db).await
    }
}

pub struct BreedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::breed::Model>, DbErr> {
        entity::prelude::Breed::find()
            .order_by_asc(entity::breed::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::breed::Model>, DbErr> {
        entity::prelude::Breed::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::breed::Model>, DbErr> {
        entity::prelude::Breed::find()
            .filter(entity::breed::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::breed::Model, DbErr> {
        entity::breed::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Breed::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Breed::find().count(self.db).await
    }
}

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Tag::find().count(self.db).await
    }
}
