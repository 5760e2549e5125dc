//! Shared request state and the blocking-store bridge.

use crate::error::ApiError;
use recordbook_core::{DbPool, RepoError, SqliteUserRepository, UserService};
use std::sync::Arc;

/// State shared by every handler. Holds the pool, never a connection.
pub struct AppState {
    pub pool: DbPool,
    pub users: UserService<SqliteUserRepository>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let users = UserService::new(SqliteUserRepository::new(pool.clone()));
        Self { pool, users }
    }

    pub fn shared(pool: DbPool) -> SharedState {
        Arc::new(Self::new(pool))
    }
}

/// Runs one synchronous store operation on tokio's blocking pool.
///
/// The closure acquires and releases its own pooled connection, so nothing
/// borrowed from the request outlives this call.
pub async fn run_blocking<T, F>(state: &SharedState, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> Result<T, RepoError> + Send + 'static,
{
    let state = Arc::clone(state);
    let result = tokio::task::spawn_blocking(move || op(&state)).await?;
    result.map_err(ApiError::from)
}
