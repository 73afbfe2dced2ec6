use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    model::user::SetAdminDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct UserListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// GET /api/users
/// Get paginated users (admin only)
pub async fn get_users(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_paginated(query.page, query.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// PUT /api/users/{id}/admin
/// Grant or revoke a user's admin flag (admin only)
pub async fn set_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<i32>,
    Json(dto): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_admin(user_id, &caller, dto.admin)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
