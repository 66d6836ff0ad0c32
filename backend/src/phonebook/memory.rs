//! Process-local contact store
//!
//! Contacts live in a vector behind an async lock and are lost on restart.

use crate::phonebook::models::{seed_contacts, Contact, ContactId, NewContact};
use crate::phonebook::store::{ContactStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

/// In-memory [`ContactStore`]
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    /// Create a store holding the default phonebook entries
    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }

    /// Create a store holding the given contacts
    ///
    /// New ids continue after the largest existing id.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { contacts, next_id }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.inner.read().await.contacts.clone())
    }

    async fn get(&self, id: ContactId) -> Result<Option<Contact>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, StoreError> {
        // Check and insert under one write lock so concurrent creates cannot both pass
        let mut inner = self.inner.write().await;
        if inner.contacts.iter().any(|c| c.name == contact.name) {
            return Err(StoreError::DuplicateName(contact.name));
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let contact = contact.with_id(id);
        inner.contacts.push(contact.clone());

        debug!("Created contact {} ({})", contact.id, contact.name);
        Ok(contact)
    }

    async fn delete(&self, id: ContactId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.contacts.len();
        inner.contacts.retain(|c| c.id != id);
        let removed = inner.contacts.len() != before;

        debug!("Delete contact {}: removed={}", id, removed);
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().await.contacts.len())
    }
}
