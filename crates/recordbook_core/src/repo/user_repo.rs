//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `User::validate()` before SQL mutations.
//! - `update_user` on a missing id is `NotFound`; last writer wins otherwise.
//! - `delete_user` on a missing id is not an error and returns `None`.
//! - A row that fails to map fails the whole `list_users` call.

use super::{RepoError, RepoResult};
use crate::db::DbPool;
use crate::model::user::User;
use crate::model::RecordId;
use rusqlite::{params, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT id, username, password, email FROM users";

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Inserts `user` and returns the store-generated id.
    fn create_user(&self, user: &User) -> RepoResult<RecordId>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn get_user(&self, id: RecordId) -> RepoResult<Option<User>>;
    fn update_user(&self, user: &User) -> RepoResult<()>;
    /// Deletes by id and returns the removed row, if any.
    fn delete_user(&self, id: RecordId) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository over a shared pool.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create_user(&self, user: &User) -> RepoResult<RecordId> {
        user.validate()?;

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (username, password, email) VALUES (?1, ?2, ?3);",
            params![user.username, user.password, user.email],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn get_user(&self, id: RecordId) -> RepoResult<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        user.validate()?;

        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE users SET username = ?1, password = ?2, email = ?3 WHERE id = ?4;",
            params![user.username, user.password, user.email, user.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "user",
                id: user.id,
            });
        }

        Ok(())
    }

    fn delete_user(&self, id: RecordId) -> RepoResult<Option<User>> {
        let conn = self.pool.get()?;
        let deleted = conn
            .query_row(
                "DELETE FROM users WHERE id = ?1 RETURNING id, username, password, email;",
                [id],
                |row| {
                    Ok((
                        row.get::<_, RecordId>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?;

        Ok(deleted.map(|(id, username, password, email)| User {
            id,
            username,
            password,
            email: email.unwrap_or_default(),
        }))
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id: RecordId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in users.id"
        )));
    }

    Ok(User {
        id,
        username: row.get("username")?,
        password: row.get("password")?,
        // Rows written by other tools may carry NULL; the record shape has no null.
        email: row.get::<_, Option<String>>("email")?.unwrap_or_default(),
    })
}
