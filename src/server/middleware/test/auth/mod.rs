use axum_extra::extract::cookie::{Cookie, CookieJar};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, ACCESS_TOKEN_COOKIE},
    service::auth::token::{generate_access_token, TokenConfig},
};

mod require;

fn test_config() -> TokenConfig {
    TokenConfig::new("test-secret".to_string(), 15, 7)
}

fn jar_with_token(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, token.to_string()))
}
