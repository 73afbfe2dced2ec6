use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::comment::CreateCommentDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// GET /api/events/{id}/comments
/// Get all comments for an event, oldest first
pub async fn get_comments(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let comments = CommentService::new(&state.db, &state.moderation)
        .get_by_event(event_id)
        .await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// POST /api/events/{id}/comments
/// Post a comment on an event
pub async fn create_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event_id): Path<i32>,
    Json(dto): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let comment = CommentService::new(&state.db, &state.moderation)
        .create(event_id, &user, dto.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /api/comments/{id}
/// Delete a comment (author or admin)
pub async fn delete_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    CommentService::new(&state.db, &state.moderation)
        .delete(comment_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
