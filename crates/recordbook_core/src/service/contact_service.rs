//! Contact use-case service backing the console menu.

use crate::model::contact::Contact;
use crate::model::{RecordId, UNSAVED_ID};
use crate::repo::contact_repo::ContactRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for contact CRUD operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_contact(&self, mut contact: Contact) -> RepoResult<Contact> {
        contact.id = UNSAVED_ID;
        contact.id = self.repo.create_contact(&contact)?;
        Ok(contact)
    }

    /// Inserts when `contact` is unsaved, otherwise updates it in place.
    pub fn save(&self, contact: &mut Contact) -> RepoResult<()> {
        if contact.is_persisted() {
            self.repo.update_contact(contact)
        } else {
            contact.id = self.repo.create_contact(contact)?;
            Ok(())
        }
    }

    pub fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        self.repo.list_contacts()
    }

    pub fn get_contact(&self, id: RecordId) -> RepoResult<Contact> {
        self.repo.get_contact(id)?.ok_or(RepoError::NotFound {
            entity: "contact",
            id,
        })
    }

    /// Updates the contact identified by `contact.id`.
    pub fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        self.repo.update_contact(contact)
    }

    pub fn delete_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        self.repo.delete_contact(id)
    }
}
