//! Contact repository contract and SQLite implementation.
//!
//! # Invariants
//! - Same lifecycle semantics as `user_repo`: validated writes, `NotFound`
//!   on updating a missing id, idempotent delete.
//! - `email` is stored as SQL NULL when absent.

use super::{RepoError, RepoResult};
use crate::db::DbPool;
use crate::model::contact::Contact;
use crate::model::RecordId;
use rusqlite::{params, OptionalExtension, Row};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, email, phone FROM contacts";

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    fn create_contact(&self, contact: &Contact) -> RepoResult<RecordId>;
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>>;
    fn update_contact(&self, contact: &Contact) -> RepoResult<()>;
    fn delete_contact(&self, id: RecordId) -> RepoResult<Option<Contact>>;
}

/// SQLite-backed contact repository over a shared pool.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: DbPool,
}

impl SqliteContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContactRepository for SqliteContactRepository {
    fn create_contact(&self, contact: &Contact) -> RepoResult<RecordId> {
        contact.validate()?;

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO contacts (name, email, phone) VALUES (?1, ?2, ?3);",
            params![contact.name, contact.email, contact.phone],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        contact.validate()?;

        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE contacts SET name = ?1, email = ?2, phone = ?3 WHERE id = ?4;",
            params![contact.name, contact.email, contact.phone, contact.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "contact",
                id: contact.id,
            });
        }

        Ok(())
    }

    fn delete_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        let conn = self.pool.get()?;
        let deleted = conn
            .query_row(
                "DELETE FROM contacts WHERE id = ?1 RETURNING id, name, email, phone;",
                [id],
                |row| {
                    Ok(Contact {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        phone: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(deleted)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let id: RecordId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in contacts.id"
        )));
    }

    Ok(Contact {
        id,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    })
}
