//! Contact use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for callers that should not see SQL-level
//!   types.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer remains storage-agnostic.

use crate::model::contact::{Contact, ContactId, NewContact};
use crate::repo::contact_repo::{ContactRepository, RepoResult};

/// Use-case service wrapper for contact data access.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a contact from name fields.
    ///
    /// # Contract
    /// - Returns the inserted row set with the created contact first.
    /// - Boundary validation errors surface unchanged from the repository.
    pub fn add_contact(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> RepoResult<Vec<Contact>> {
        self.repo
            .create(&NewContact::new(first_name, last_name))
    }

    /// Creates a contact from an already-built input record.
    pub fn create(&self, new_contact: &NewContact) -> RepoResult<Vec<Contact>> {
        self.repo.create(new_contact)
    }

    /// Lists every contact in ascending id order.
    pub fn find_all(&self) -> RepoResult<Vec<Contact>> {
        self.repo.find_all()
    }

    /// Gets one contact by id; absent ids yield `None`.
    pub fn find_by_id(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        self.repo.find_by_id(id)
    }

    /// Deletes one contact by id, returning the number of rows removed.
    pub fn destroy(&self, id: ContactId) -> RepoResult<usize> {
        self.repo.destroy(id)
    }

    /// Case-insensitive substring search over both name columns.
    pub fn search(&self, term: &str) -> RepoResult<Vec<Contact>> {
        self.repo.search(term)
    }
}
