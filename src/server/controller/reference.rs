//! Endpoints for the reference-data tables. Listing is open to any
//! authenticated user; mutation requires admin permissions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::reference::{BreedDto, CreateNamedDto, ServerDto, TagDto},
    server::{
        data::reference::{BreedRepository, ServerRepository, TagRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// GET /api/servers
pub async fn get_servers(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let servers: Vec<ServerDto> = ServerRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|s| ServerDto {
            id: s.id,
            name: s.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(servers)))
}

/// POST /api/servers
pub async fn create_server(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    let repo = ServerRepository::new(&state.db);

    validate_name(&dto.name)?;

    if repo.find_by_name(&dto.name).await?.is_some() {
        return Err(AppError::Conflict("Server already exists".to_string()));
    }

    let server = repo.create(dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(ServerDto {
            id: server.id,
            name: server.name,
        }),
    ))
}

/// DELETE /api/servers/{id}
pub async fn delete_server(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    if ServerRepository::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Server not found".to_string()))
    }
}

/// GET /api/breeds
pub async fn get_breeds(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let breeds: Vec<BreedDto> = BreedRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|b| BreedDto {
            id: b.id,
            name: b.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(breeds)))
}

/// POST /api/breeds
pub async fn create_breed(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    let repo = BreedRepository::new(&state.db);

    validate_name(&dto.name)?;

    if repo.find_by_name(&dto.name).await?.is_some() {
        return Err(AppError::Conflict("Breed already exists".to_string()));
    }

    let breed = repo.create(dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(BreedDto {
            id: breed.id,
            name: breed.name,
        }),
    ))
}

/// DELETE /api/breeds/{id}
pub async fn delete_breed(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    if BreedRepository::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Breed not found".to_string()))
    }
}

/// GET /api/tags
pub async fn get_tags(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    let tags: Vec<TagDto> = TagRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|t| TagDto {
            id: t.id,
            name: t.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(tags)))
}

/// POST /api/tags
pub async fn create_tag(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    let repo = TagRepository::new(&state.db);

    validate_name(&dto.name)?;

    if repo.find_by_name(&dto.name).await?.is_some() {
        return Err(AppError::Conflict("Tag already exists".to_string()));
    }

    let tag = repo.create(dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(TagDto {
            id: tag.id,
            name: tag.name,
        }),
    ))
}

/// DELETE /api/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[Permission::Admin])
        .await?;

    if TagRepository::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Tag not found".to_string()))
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    Ok(())
}
