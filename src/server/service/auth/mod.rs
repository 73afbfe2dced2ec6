//! Authentication business logic: registration, login, token refresh, and
//! logout. Controllers translate the returned [`SessionTokens`] into
//! HttpOnly cookies; this module never touches HTTP types directly.

pub mod password;
pub mod token;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{auth::RegisterDto, user::UserDto},
    server::{
        data::{refresh_token::RefreshTokenRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::CreateUserParams,
        service::auth::token::TokenConfig,
    },
};

/// Freshly issued credential pair for a session. The refresh token is the
/// opaque client-side value; only its hash is persisted.
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub access_max_age_secs: i64,
    pub refresh_max_age_secs: i64,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a TokenConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a TokenConfig) -> Self {
        Self { db, config }
    }

    /// Registers a new user and opens a session.
    ///
    /// The first user ever registered is promoted to admin so a fresh
    /// deployment can be administered without manual database edits.
    ///
    /// # Returns
    /// - `Ok((user, tokens))`: The created user and their session tokens
    /// - `Err(AuthError::AlreadyTaken)`: Username or email already in use
    pub async fn register(
        &self,
        dto: RegisterDto,
    ) -> Result<(entity::user::Model, SessionTokens), AppError> {
        let user_repo = UserRepository::new(self.db);

        if dto.username.trim().is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if !dto.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.len() < password::MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                password::MIN_PASSWORD_LEN
            )));
        }

        if let Some(existing) = user_repo
            .find_by_username_or_email(&dto.username, &dto.email)
            .await?
        {
            let field = if existing.username == dto.username {
                "Username"
            } else {
                "Email"
            };
            return Err(AuthError::AlreadyTaken(field).into());
        }

        let admin = !user_repo.admin_exists().await?;

        let user = user_repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                password_hash: password::hash_password(&dto.password)?,
                admin,
            })
            .await?;

        let tokens = self.open_session(user.id).await?;

        Ok((user, tokens))
    }

    /// Verifies credentials and opens a session.
    ///
    /// # Returns
    /// - `Ok((user, tokens))`: The authenticated user and their session tokens
    /// - `Err(AuthError::InvalidCredentials)`: Unknown username or wrong password
    pub async fn login(
        &self,
        username: &str,
        plaintext_password: &str,
    ) -> Result<(entity::user::Model, SessionTokens), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(plaintext_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.open_session(user.id).await?;

        Ok((user, tokens))
    }

    /// Exchanges a valid refresh token for a new session token pair.
    ///
    /// The presented token is revoked and replaced (rotation), so a leaked
    /// refresh token stops working as soon as its legitimate holder uses it.
    /// Presenting an already-rotated token is treated as reuse of a stolen
    /// token and ends every session for that user.
    ///
    /// # Returns
    /// - `Ok(tokens)`: New session tokens
    /// - `Err(AuthError::InvalidRefreshToken)`: Missing, unknown, expired,
    ///   or revoked token
    pub async fn refresh(&self, refresh_token: &str) -> Result<SessionTokens, AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);

        let token_hash = token::hash_refresh_token(refresh_token);

        let Some(record) = token_repo.find_valid_by_hash(&token_hash).await? else {
            if let Some(stale) = token_repo.find_by_hash(&token_hash).await? {
                if stale.revoked {
                    let revoked = token_repo.revoke_all_for_user(stale.user_id).await?;
                    tracing::warn!(
                        "Rotated refresh token reused for user {}, revoked {} sessions",
                        stale.user_id,
                        revoked
                    );
                }
            }
            return Err(AuthError::InvalidRefreshToken.into());
        };

        token_repo.revoke(&token_hash).await?;

        self.open_session(record.user_id).await
    }

    /// Revokes the presented refresh token, if any. Unknown tokens are
    /// ignored so logout is idempotent.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AppError> {
        if let Some(refresh_token) = refresh_token {
            let token_repo = RefreshTokenRepository::new(self.db);
            token_repo
                .revoke(&token::hash_refresh_token(refresh_token))
                .await?;
        }

        Ok(())
    }

    /// Issues a fresh access/refresh pair and persists the refresh hash.
    async fn open_session(&self, user_id: i32) -> Result<SessionTokens, AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);

        let access_token = token::generate_access_token(user_id, self.config)?;

        let refresh_token = token::generate_refresh_token();
        let expires_at = Utc::now() + Duration::days(self.config.refresh_expiry_days);
        token_repo
            .create(user_id, token::hash_refresh_token(&refresh_token), expires_at)
            .await?;

        Ok(SessionTokens {
            access_token,
            refresh_token,
            access_max_age_secs: self.config.access_expiry_mins * 60,
            refresh_max_age_secs: self.config.refresh_expiry_days * 24 * 3600,
        })
    }
}

/// Converts a user entity into its wire DTO.
pub fn user_to_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        admin: user.admin,
        created_at: user.created_at,
    }
}
