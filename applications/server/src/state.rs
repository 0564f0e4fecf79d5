/// Shared application state
use crate::error::{Result, ServerError};
use roster_core::UserStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<UserStore>>,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the user store. Every store operation is synchronous and runs
    /// entirely inside this single lock, so concurrent requests observe the
    /// store as if handled one at a time.
    pub fn users(&self) -> Result<MutexGuard<'_, UserStore>> {
        self.store
            .lock()
            .map_err(|_| ServerError::Internal("user store mutex poisoned".to_string()))
    }
}
