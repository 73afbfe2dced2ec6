use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout, refresh_token, register},
        character::{create_character, delete_character, get_characters, update_character},
        comment::{create_comment, delete_comment, get_comments},
        event::{
            create_event, delete_event, get_event, get_events, join_event, leave_event,
            update_event,
        },
        reference::{
            create_breed, create_server, create_tag, delete_breed, delete_server, delete_tag,
            get_breeds, get_servers, get_tags,
        },
        user::{get_users, set_admin},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh_token))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/servers", get(get_servers).post(create_server))
        .route("/api/servers/{id}", delete(delete_server))
        .route("/api/breeds", get(get_breeds).post(create_breed))
        .route("/api/breeds/{id}", delete(delete_breed))
        .route("/api/tags", get(get_tags).post(create_tag))
        .route("/api/tags/{id}", delete(delete_tag))
        .route("/api/characters", get(get_characters).post(create_character))
        .route(
            "/api/characters/{id}",
            put(update_character).delete(delete_character),
        )
        .route("/api/events", get(get_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/events/{id}/join", post(join_event))
        .route("/api/events/{id}/leave", post(leave_event))
        .route(
            "/api/events/{id}/comments",
            get(get_comments).post(create_comment),
        )
        .route("/api/comments/{id}", delete(delete_comment))
        .route("/api/users", get(get_users))
        .route("/api/users/{id}/admin", put(set_admin))
}
