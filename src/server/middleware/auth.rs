//! Request authentication guard.
//!
//! Controllers construct an [`AuthGuard`] from the shared state and the
//! request's cookie jar, then call [`AuthGuard::require`] with the
//! permissions the endpoint demands. The guard validates the access-token
//! cookie, loads the user, and enforces permissions in one place.

use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::auth::token::{validate_access_token, TokenConfig},
};

/// Cookie carrying the short-lived JWT access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Cookie carrying the opaque rotating refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenConfig,
    jar: &'a CookieJar,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenConfig, jar: &'a CookieJar) -> Self {
        Self { db, tokens, jar }
    }

    /// Authenticates the request and checks the given permissions.
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated user
    /// - `Err(AuthError::MissingToken)`: No access-token cookie
    /// - `Err(AuthError::InvalidToken)`: Signature or expiry validation failed
    /// - `Err(AuthError::UserNotInDatabase)`: Token refers to a deleted user
    /// - `Err(AuthError::AccessDenied)`: A required permission is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(cookie) = self.jar.get(ACCESS_TOKEN_COOKIE) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = validate_access_token(cookie.value(), self.tokens)?;

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Endpoint requires admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
