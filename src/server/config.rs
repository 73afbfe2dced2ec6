use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub host: String,
    pub port: u16,

    pub database_url: String,

    pub jwt_secret: String,
    pub access_expiry_mins: i64,
    pub refresh_expiry_days: i64,

    /// Allowed CORS origin for browser clients, if any.
    pub cors_origin: Option<String>,

    /// Additional words appended to the built-in profanity list,
    /// comma-separated.
    pub profanity_extra_words: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_optional("PORT", DEFAULT_PORT)?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            access_expiry_mins: parse_optional("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS)?,
            refresh_expiry_days: parse_optional(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            )?,
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
            profanity_extra_words: std::env::var("PROFANITY_EXTRA_WORDS")
                .map(|list| {
                    list.split(',')
                        .map(|word| word.trim().to_string())
                        .filter(|word| !word.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn parse_optional<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
