use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    model::event::{CreateEventDto, TeamActionDto, UpdateEventDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::event::EventFilter,
        service::event::EventService, state::AppState,
    },
};

#[derive(Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub server_id: Option<i32>,
    pub tag_id: Option<i32>,
}

fn default_per_page() -> u64 {
    10
}

/// GET /api/events
/// Get paginated upcoming events, optionally filtered by server and tag
pub async fn get_events(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let events = EventService::new(&state.db, &state.moderation)
        .get_paginated(
            EventFilter {
                server_id: query.server_id,
                tag_id: query.tag_id,
            },
            query.page,
            query.per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(events)))
}

/// GET /api/events/{id}
/// Get event details including team members and comments
pub async fn get_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.moderation)
        .get_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((StatusCode::OK, Json(event)))
}

/// POST /api/events
/// Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.moderation)
        .create(user.id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id}
/// Update an event (creator or admin)
pub async fn update_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
    Json(dto): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.moderation)
        .update(event_id, &user, dto)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// DELETE /api/events/{id}
/// Delete an event (creator or admin)
pub async fn delete_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    EventService::new(&state.db, &state.moderation)
        .delete(event_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/events/{id}/join
/// Add one of the caller's characters to the event's team
pub async fn join_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
    Json(dto): Json<TeamActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.moderation)
        .join(event_id, &user, dto.character_id)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// POST /api/events/{id}/leave
/// Remove one of the caller's characters from the event's team
pub async fn leave_event(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
    Json(dto): Json<TeamActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.moderation)
        .leave(event_id, &user, dto.character_id)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}
