//! Phonebook Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod phonebook;
/// Application state management
///
/// Holds the contact store shared by all handlers.
pub mod state;
