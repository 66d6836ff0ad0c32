// Application state
// Wraps the contact store handed to every handler

use crate::phonebook::{ContactStore, MemoryStore};
use std::sync::Arc;

/// Main application state
/// Cheap to clone; all clones share one contact store
#[derive(Clone)]
pub struct AppState {
    /// Contact storage backend
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    /// Create application state over the given store
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// State backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// State backed by an in-memory store holding the default entries
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemoryStore::seeded()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_state_is_empty() {
        let state = AppState::in_memory();
        assert_eq!(state.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let state = AppState::seeded();
        let clone = state.clone();
        clone.store.delete(1).await.unwrap();
        assert_eq!(state.store.count().await.unwrap(), 3);
    }
}
