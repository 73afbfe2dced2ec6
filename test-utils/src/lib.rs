//! Shared test support for the partyboard workspace.
//!
//! Tests build an isolated in-memory SQLite database through [`builder::TestBuilder`],
//! which yields a [`context::TestContext`] holding the connection. The
//! [`factory`] module then seeds rows with sensible defaults so a test only
//! spells out the fields it cares about.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_auth_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::create_user(db).await?;
//!     // Exercise the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
