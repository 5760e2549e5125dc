//! REST surface for recordbook users.
//!
//! # Responsibility
//! - Map five method+path routes onto `UserService` calls.
//! - Wrap every response in the `{status, data, message}` envelope.
//!
//! # Invariants
//! - Handlers never hold a database connection across an `.await`; store
//!   work runs on the blocking pool with a scoped pooled connection.
//! - Store error text is logged, never returned to clients.

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use server::{build_router, HttpServer};
