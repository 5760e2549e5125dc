//! Core domain logic for recordbook.
//! This crate is the single source of truth for record invariants and owns
//! every SQL statement; the HTTP and console front ends only call services.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod showcase;

pub use db::{open_pool, open_pool_in_memory, DbError, DbPool, DbResult};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::Contact;
pub use model::user::User;
pub use model::{RecordId, ValidationError, UNSAVED_ID};
pub use repo::contact_repo::{ContactRepository, SqliteContactRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::contact_service::ContactService;
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

#[cfg(test)]
mod tests {
    use super::ping;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }
}
