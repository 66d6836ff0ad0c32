//! Contact store abstraction
//!
//! Handlers depend on [`ContactStore`] rather than on a concrete backend, so the
//! in-memory store and the SQLite store are interchangeable.

use crate::phonebook::models::{Contact, ContactId, NewContact};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a contact store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A contact with this name already exists
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// The backend did not answer in time (e.g., pool exhausted)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure
    #[error("Store error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(err.to_string())
            }
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateName(db_err.message().to_string())
            }
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Storage capability for phonebook contacts
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts in ascending id order
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Look up a contact by id
    async fn get(&self, id: ContactId) -> Result<Option<Contact>, StoreError>;

    /// Store a new contact, assigning a fresh id
    ///
    /// Fails with [`StoreError::DuplicateName`] if the name is already taken.
    async fn create(&self, contact: NewContact) -> Result<Contact, StoreError>;

    /// Remove a contact, returning whether one existed
    async fn delete(&self, id: ContactId) -> Result<bool, StoreError>;

    /// Number of stored contacts
    async fn count(&self) -> Result<usize, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_other_errors_map_to_backend() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Backend(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::Protocol("bad frame".to_string())),
            StoreError::Backend(_)
        ));
    }
}
