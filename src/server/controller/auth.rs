use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
        service::auth::{user_to_dto, AuthService, SessionTokens},
        state::AppState,
    },
};

/// POST /api/auth/register
/// Create a new user account and open a session
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (user, tokens) = auth_service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        with_session_cookies(jar, &tokens),
        Json(user_to_dto(user)),
    ))
}

/// POST /api/auth/login
/// Verify credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (user, tokens) = auth_service.login(&dto.username, &dto.password).await?;

    Ok((
        StatusCode::OK,
        with_session_cookies(jar, &tokens),
        Json(user_to_dto(user)),
    ))
}

/// POST /api/auth/refresh-token
/// Rotate the refresh token and reissue both session cookies
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let presented = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let tokens = match presented {
        Some(token) => auth_service.refresh(&token).await?,
        None => {
            return Err(crate::server::error::auth::AuthError::InvalidRefreshToken.into());
        }
    };

    Ok((with_session_cookies(jar, &tokens), StatusCode::OK))
}

/// POST /api/auth/logout
/// Revoke the presented refresh token and clear session cookies
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let presented = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string());

    auth_service.logout(presented.as_deref()).await?;

    let jar = jar
        .remove(Cookie::from(ACCESS_TOKEN_COOKIE))
        .remove(Cookie::from(REFRESH_TOKEN_COOKIE));

    Ok((jar, StatusCode::NO_CONTENT))
}

/// GET /api/auth/user
/// Get the currently authenticated user
pub async fn get_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user_to_dto(user))))
}

/// Attaches freshly issued session cookies to the response jar.
///
/// Both cookies are HttpOnly with SameSite=Lax; the browser handles them,
/// the SPA never reads them directly.
fn with_session_cookies(jar: CookieJar, tokens: &SessionTokens) -> CookieJar {
    let access = Cookie::build((ACCESS_TOKEN_COOKIE, tokens.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(tokens.access_max_age_secs))
        .build();

    let refresh = Cookie::build((REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(tokens.refresh_max_age_secs))
        .build();

    jar.add(access).add(refresh)
}
