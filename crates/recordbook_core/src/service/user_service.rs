//! User use-case service.
//!
//! # Responsibility
//! - Provide the create/list/get/update/delete entry points used by the REST
//!   surface.
//! - Turn repository `Option` results into `NotFound` where a caller needs a
//!   record.
//!
//! # Invariants
//! - `create_user` always inserts, whatever `id` the caller supplied.
//! - `update_user` takes the id from its argument, never from the payload.

use crate::model::user::User;
use crate::model::{RecordId, UNSAVED_ID};
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Constructs and inserts a user from scalar fields.
    pub fn register(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> RepoResult<User> {
        self.create_user(User::new(username, password, email))
    }

    /// Inserts `user` and returns it with the generated id.
    pub fn create_user(&self, mut user: User) -> RepoResult<User> {
        user.id = UNSAVED_ID;
        user.id = self.repo.create_user(&user)?;
        Ok(user)
    }

    /// Inserts when `user` is unsaved, otherwise updates it in place.
    pub fn save(&self, user: &mut User) -> RepoResult<()> {
        if user.is_persisted() {
            self.repo.update_user(user)
        } else {
            user.id = self.repo.create_user(user)?;
            Ok(())
        }
    }

    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// Gets one user, or `NotFound` when no row matches.
    pub fn get_user(&self, id: RecordId) -> RepoResult<User> {
        self.repo
            .get_user(id)?
            .ok_or(RepoError::NotFound { entity: "user", id })
    }

    /// Replaces all scalar fields of user `id` with those of `fields`.
    pub fn update_user(&self, id: RecordId, mut fields: User) -> RepoResult<User> {
        fields.id = id;
        self.repo.update_user(&fields)?;
        Ok(fields)
    }

    /// Deletes user `id`; returns the removed record, or `None` if it did not
    /// exist.
    pub fn delete_user(&self, id: RecordId) -> RepoResult<Option<User>> {
        self.repo.delete_user(id)
    }
}
