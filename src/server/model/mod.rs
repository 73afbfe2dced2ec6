//! Operation parameter types passed between controllers, services, and
//! repositories. These stay server-side; the wire-facing DTOs live in
//! `crate::model`.

pub mod character;
pub mod comment;
pub mod event;
pub mod user;
