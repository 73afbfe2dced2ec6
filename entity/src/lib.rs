//! SeaORM entity definitions for the partyboard database schema.

pub mod prelude;

pub mod breed;
pub mod character;
pub mod comment;
pub mod event;
pub mod event_character;
pub mod refresh_token;
pub mod server;
pub mod tag;
pub mod user;
