//! Application state shared across handlers.

use std::sync::Arc;

use luxe_store::{CacheOptions, CatalogStore, StoreError};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The storefront only ever
/// reads from the store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: CatalogStore,
}

impl AppState {
    /// Create a new application state around an existing store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Open the file-backed store named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = CatalogStore::open(
            &config.data_dir,
            CacheOptions {
                time_to_live: config.cache_ttl,
            },
        )?;
        Ok(Self::new(config, store))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }
}
