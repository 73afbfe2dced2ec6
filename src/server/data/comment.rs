use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::CreateCommentParams;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets an event's comments with their authors, oldest first.
    pub async fn get_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::EventId.eq(event_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
