//! Connection pool lifecycle.
//!
//! # Responsibility
//! - Build the `r2d2` pool once at process start.
//! - Run migrations through the pool before handing it out.
//!
//! # Invariants
//! - Every pooled connection gets the same pragmas as `open_db`.
//! - In-memory pools hold exactly one long-lived connection, because each
//!   SQLite `:memory:` connection is its own database.

use super::migrations::apply_migrations;
use super::open::{configure_connection, BUSY_TIMEOUT};
use super::{DbError, DbResult};
use log::{error, info};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Instant;

const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Process-wide SQLite connection pool. Cloning is cheap (shared handle).
pub type DbPool = Pool<SqliteConnectionManager>;

/// Scoped connection guard; the connection returns to the pool on drop.
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Builds a file-backed pool and applies pending migrations.
///
/// # Errors
/// - `DbError::Pool` when no connection can be established (fatal at
///   start-up).
/// - Migration errors from the first acquired connection.
pub fn open_pool(path: impl AsRef<Path>) -> DbResult<DbPool> {
    let manager = SqliteConnectionManager::file(path).with_init(|conn| configure_connection(conn));
    let builder = Pool::builder()
        .max_size(DEFAULT_MAX_CONNECTIONS)
        .connection_timeout(BUSY_TIMEOUT);
    build_and_migrate(builder, manager, "file")
}

/// Builds a single-connection in-memory pool and applies migrations.
pub fn open_pool_in_memory() -> DbResult<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| configure_connection(conn));
    let builder = Pool::builder()
        .max_size(1)
        .min_idle(Some(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(BUSY_TIMEOUT);
    build_and_migrate(builder, manager, "memory")
}

fn build_and_migrate(
    builder: r2d2::Builder<SqliteConnectionManager>,
    manager: SqliteConnectionManager,
    mode: &str,
) -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!("event=pool_open module=db status=start mode={mode}");

    let result: DbResult<DbPool> = builder
        .build(manager)
        .map_err(DbError::from)
        .and_then(|pool| {
            let mut conn = pool.get()?;
            apply_migrations(&mut conn)?;
            drop(conn);
            Ok(pool)
        });

    match &result {
        Ok(pool) => info!(
            "event=pool_open module=db status=ok mode={} max_size={} duration_ms={}",
            mode,
            pool.max_size(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=pool_open module=db status=error mode={} duration_ms={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}
