use sea_orm::DatabaseConnection;

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::{data::user::UserRepository, error::AppError, service::auth::user_to_dto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated users for the admin user list.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsersDto, AppError> {
        let repo = UserRepository::new(self.db);

        let (users, total) = repo.get_all_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsersDto {
            users: users.into_iter().map(user_to_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Sets or clears a user's admin flag.
    ///
    /// A user may not strip their own admin flag, so the deployment always
    /// keeps at least one reachable admin.
    pub async fn set_admin(
        &self,
        target_id: i32,
        caller: &entity::user::Model,
        admin: bool,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        if target_id == caller.id && !admin {
            return Err(AppError::BadRequest(
                "Cannot remove your own admin access".to_string(),
            ));
        }

        repo.find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let updated = repo.set_admin(target_id, admin).await?;

        Ok(user_to_dto(updated))
    }
}
