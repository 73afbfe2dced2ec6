//! The HTTP backend: routing, auth, business rules, and persistence.
//!
//! Built on Axum for the web layer and SeaORM for storage, organized in
//! layers that only call downward:
//!
//! - `controller/` - request handlers; run the `AuthGuard`, convert DTOs,
//!   delegate to a service
//! - `service/` - business rules; validation, moderation, ownership checks
//! - `data/` - repositories; queries and entity mapping, nothing else
//! - `model/` - operation parameter types passed from services to the data
//!   layer
//! - `error/` - `AppError` and its HTTP response mapping
//! - `middleware/` - cookie-based authentication guard
//!
//! Infrastructure lives alongside the layers: `config` reads the
//! environment, `state` carries the shared `AppState` (database handle,
//! token configuration, moderation filter), `startup` connects, migrates,
//! and seeds reference data, and `router` wires the routes.
//!
//! A request enters through the router, is authenticated and converted in a
//! controller, validated and orchestrated in a service, persisted through a
//! repository, and flows back out as a DTO.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
