//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::CreateUserParams;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user record.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error, including unique constraint violations
    ///   on username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            admin: ActiveValue::Set(params.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Looks up a user by username or email, used to detect duplicate
    /// registrations in a single query.
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .one(self.db)
            .await
    }

    /// Gets paginated users ordered by username.
    ///
    /// # Returns
    /// - `Ok((users, total))`: Page of users and the total row count
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Sets or clears the admin flag on a user.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr::RecordNotFound)`: No user with that id
    pub async fn set_admin(&self, id: i32, admin: bool) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.admin = ActiveValue::Set(admin);

        active_model.update(self.db).await
    }

    /// Checks whether any admin user exists, used at startup to decide
    /// whether the first registered user should be promoted.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
