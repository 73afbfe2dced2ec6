//! Business logic layer orchestrating between controllers and repositories.

pub mod auth;
pub mod character;
pub mod comment;
pub mod event;
pub mod moderation;
pub mod user;
