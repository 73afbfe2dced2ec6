//! Factories for seeding test rows.
//!
//! Every entity gets a module with a `create_*` shorthand that inserts a row
//! with unique defaults, and the larger entities also expose a `*Factory`
//! builder for overriding individual fields. Foreign keys are passed in
//! explicitly, so a test controls exactly which rows relate to which.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let server = factory::server::create_server(&db).await?;
//!
//! // Or let the helper wire up the whole dependency chain:
//! let (user, server, tag, event) =
//!     factory::helpers::create_event_with_dependencies(&db).await?;
//! ```
//!
//! Field overrides go through the builders:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("kara")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod breed;
pub mod character;
pub mod comment;
pub mod event;
pub mod helpers;
pub mod refresh_token;
pub mod server;
pub mod tag;
pub mod user;

pub use breed::{create_breed, create_breed_with_name};
pub use character::create_character;
pub use comment::{create_comment, create_comment_with_content};
pub use event::create_event;
pub use refresh_token::{
    create_expired_refresh_token, create_refresh_token, create_refresh_token_with_hash,
};
pub use server::{create_server, create_server_with_name};
pub use tag::{create_tag, create_tag_with_name};
pub use user::{create_admin, create_user};
