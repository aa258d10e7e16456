//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::MenuConfig;
use crate::store::ItemStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the item store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MenuConfig,
    store: Arc<dyn ItemStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `store` - Item store backend
    #[must_use]
    pub fn new(config: MenuConfig, store: Arc<dyn ItemStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.inner.config
    }

    /// Get a reference to the item store.
    #[must_use]
    pub fn store(&self) -> &dyn ItemStore {
        self.inner.store.as_ref()
    }
}
