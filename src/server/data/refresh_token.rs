use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new refresh token hash for a user.
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            revoked: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a live token record by hash. Expired and revoked records are
    /// filtered out here so callers only ever see usable tokens.
    pub async fn find_valid_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .filter(entity::refresh_token::Column::Revoked.eq(false))
            .filter(entity::refresh_token::Column::ExpiresAt.gt(Utc::now()))
            .one(self.db)
            .await
    }

    /// Finds a token record by hash regardless of state. Used to detect
    /// reuse of an already-rotated token.
    pub async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await
    }

    /// Marks a single token as revoked.
    ///
    /// # Returns
    /// - `Ok(true)`: The token existed and is now revoked
    /// - `Ok(false)`: No token with that hash
    pub async fn revoke(&self, token_hash: &str) -> Result<bool, DbErr> {
        let token = self.find_by_hash(token_hash).await?;

        let Some(token) = token else {
            return Ok(false);
        };

        let mut active_model: entity::refresh_token::ActiveModel = token.into();
        active_model.revoked = ActiveValue::Set(true);
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Revokes every token belonging to a user, ending all their sessions.
    pub async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .col_expr(
                entity::refresh_token::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::Revoked.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes expired and revoked token rows.
    pub async fn delete_stale(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(
                sea_orm::Condition::any()
                    .add(entity::refresh_token::Column::ExpiresAt.lte(Utc::now()))
                    .add(entity::refresh_token::Column::Revoked.eq(true)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
