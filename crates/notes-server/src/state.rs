//! Shared application state.

use notes_store::Store;

/// State handed to every handler. Cloning is cheap; all clones share the
/// same store pool.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Access the store handle.
    pub fn store(&self) -> &Store {
        &self.store
    }
}
