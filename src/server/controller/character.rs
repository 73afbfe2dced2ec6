use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::character::CharacterService,
        state::AppState,
    },
};

/// GET /api/characters
/// Get the calling user's characters
pub async fn get_characters(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let characters = CharacterService::new(&state.db, &state.moderation)
        .get_for_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// POST /api/characters
/// Create a character for the calling user
pub async fn create_character(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let character = CharacterService::new(&state.db, &state.moderation)
        .create(user.id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/characters/{id}
/// Update a character (owner or admin)
pub async fn update_character(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(character_id): Path<i32>,
    Json(dto): Json<UpdateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let character = CharacterService::new(&state.db, &state.moderation)
        .update(character_id, &user, dto)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// DELETE /api/characters/{id}
/// Delete a character (owner or admin)
pub async fn delete_character(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    CharacterService::new(&state.db, &state.moderation)
        .delete(character_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
