//! Typed client for the REST API.
//!
//! [`api::ApiClient`] wraps a `reqwest` client with a cookie store and exposes
//! one method per endpoint. All calls go through a session-refresh layer: when
//! the access token expires the client silently refreshes the session and
//! replays the failed request once, so callers only see a 401 when the
//! session is truly gone.

pub mod api;
pub mod model;
