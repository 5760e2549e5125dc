//! Small store maintenance helpers (health ping, table checks, truncation).

use super::{DbError, DbResult};
use rusqlite::Connection;

/// Tables owned by recordbook migrations. Only these may be truncated.
pub const KNOWN_TABLES: &[&str] = &["users", "contacts"];

/// Round-trips a trivial statement to prove the connection is alive.
pub fn ping(conn: &Connection) -> DbResult<()> {
    conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Removes every row of a known table and resets its autoincrement counter.
///
/// Table names cannot be bound as parameters, so the name is checked against
/// `KNOWN_TABLES` before it is interpolated.
pub fn truncate_table(conn: &Connection, table_name: &str) -> DbResult<()> {
    if !KNOWN_TABLES.contains(&table_name) {
        return Err(DbError::UnknownTable(table_name.to_string()));
    }

    conn.execute_batch(&format!(
        "DELETE FROM {table_name};
         DELETE FROM sqlite_sequence WHERE name = '{table_name}';"
    ))?;
    Ok(())
}
