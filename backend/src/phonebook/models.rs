//! Phonebook data models
//!
//! Defines the stored contact record and the validated input used to create one.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Identifier assigned to a contact by the store
pub type ContactId = i64;

/// A phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// Store-assigned identifier, never reused
    pub id: ContactId,
    /// Display name, unique across the phonebook
    pub name: String,
    /// Free-form phone number
    pub number: String,
}

/// Reasons a contact cannot be created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Neither field was supplied
    #[error("name and number missing")]
    NameAndNumberMissing,

    /// Name was absent or empty
    #[error("name missing")]
    NameMissing,

    /// Number was absent or empty
    #[error("number missing")]
    NumberMissing,

    /// Another contact already uses this name
    #[error("name must be unique")]
    NameNotUnique,
}

/// A validated contact that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Display name (non-empty)
    pub name: String,
    /// Phone number (non-empty)
    pub number: String,
}

impl NewContact {
    /// Validate raw request fields
    ///
    /// An absent or empty field counts as missing. The first failing check wins,
    /// with the combined case reported before the single-field ones.
    pub fn validate(name: Option<String>, number: Option<String>) -> Result<Self, ContactError> {
        let name = name.filter(|n| !n.is_empty());
        let number = number.filter(|n| !n.is_empty());

        match (name, number) {
            (None, None) => Err(ContactError::NameAndNumberMissing),
            (None, Some(_)) => Err(ContactError::NameMissing),
            (Some(_), None) => Err(ContactError::NumberMissing),
            (Some(name), Some(number)) => Ok(Self { name, number }),
        }
    }

    /// Attach a store-assigned id
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            number: self.number,
        }
    }
}

/// Entries a fresh in-memory phonebook starts with
pub fn seed_contacts() -> Vec<Contact> {
    [
        ("Arto Hellas", "040-123456"),
        ("Ada Lovelace", "39-44-5323523"),
        ("Dan Abramov", "12-43-234345"),
        ("Mary Poppendieck", "39-23-6423122"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, number), id)| Contact {
        id,
        name: name.to_string(),
        number: number.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let contact = NewContact::validate(some("Ada Lovelace"), some("39-44-5323523")).unwrap();
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.number, "39-44-5323523");
    }

    #[test]
    fn test_validate_reports_both_missing_first() {
        assert_eq!(
            NewContact::validate(None, None),
            Err(ContactError::NameAndNumberMissing)
        );
        assert_eq!(
            NewContact::validate(some(""), some("")),
            Err(ContactError::NameAndNumberMissing)
        );
    }

    #[test]
    fn test_validate_single_missing_field() {
        assert_eq!(
            NewContact::validate(None, some("040-123456")),
            Err(ContactError::NameMissing)
        );
        assert_eq!(
            NewContact::validate(some("Arto Hellas"), some("")),
            Err(ContactError::NumberMissing)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::NameAndNumberMissing.to_string(),
            "name and number missing"
        );
        assert_eq!(ContactError::NameMissing.to_string(), "name missing");
        assert_eq!(ContactError::NumberMissing.to_string(), "number missing");
        assert_eq!(ContactError::NameNotUnique.to_string(), "name must be unique");
    }

    #[test]
    fn test_seed_contacts_have_sequential_ids() {
        let seed = seed_contacts();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[0].name, "Arto Hellas");
        assert_eq!(seed[3].id, 4);
        assert_eq!(seed[3].number, "39-23-6423122");
    }
}
