//! Shared DTOs exchanged between the API client and the server.

pub mod api;
pub mod auth;
pub mod character;
pub mod comment;
pub mod event;
pub mod reference;
pub mod user;
