mod character;
mod comment;
mod event;
mod reference;
mod refresh_token;
mod user;
