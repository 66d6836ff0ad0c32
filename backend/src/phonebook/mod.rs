//! Phonebook module
//!
//! Contact model, validation, and the storage backends behind [`ContactStore`].

pub mod db;
pub mod memory;
pub mod models;
pub mod store;

pub use db::SqliteStore;
pub use memory::MemoryStore;
pub use models::{Contact, ContactError, ContactId, NewContact};
pub use store::{ContactStore, StoreError};
