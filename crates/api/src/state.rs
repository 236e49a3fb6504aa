//! Shared application state

use std::sync::Arc;

use zakvibe_shared::MemoryStore;

use crate::config::Config;

/// State passed to every handler.
///
/// The store is held behind `Arc` so handlers share the same two maps; see
/// `zakvibe_shared::store` for the locking discipline.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            config,
        }
    }
}
