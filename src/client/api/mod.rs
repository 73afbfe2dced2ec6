pub mod helper;

mod auth;
mod character;
mod comment;
mod event;
mod reference;
mod user;

pub use helper::ApiClient;
