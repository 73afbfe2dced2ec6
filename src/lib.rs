//! Community event scheduling for an online game.
//!
//! Players register characters, create grouping events (dungeons, farming,
//! PvP sessions), join other players' events, and comment on them. The crate
//! ships both sides of the wire: an Axum/SeaORM REST backend under [`server`]
//! and a typed `reqwest` API client under [`client`] that transparently
//! refreshes expired sessions. Shared request/response DTOs live in [`model`].

pub mod client;
pub mod model;
pub mod server;
