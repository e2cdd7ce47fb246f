//! Application state shared across handlers.

use std::sync::Arc;

use luxe_store::{CacheOptions, CatalogStore, StoreError};

use crate::config::AdminConfig;
use crate::services::{AdminAuthService, ProductManager};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: CatalogStore,
    auth: AdminAuthService,
    products: ProductManager,
}

impl AppState {
    /// Build state around an existing store, with credentials from `config`.
    #[must_use]
    pub fn new(config: AdminConfig, store: CatalogStore) -> Self {
        let auth = AdminAuthService::from_config(&config, store.clone());
        Self::with_auth(config, store, auth)
    }

    /// Build state with an explicit auth service.
    #[must_use]
    pub fn with_auth(config: AdminConfig, store: CatalogStore, auth: AdminAuthService) -> Self {
        let products = ProductManager::new(store.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                auth,
                products,
            }),
        }
    }

    /// Open the file-backed store named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn from_config(config: AdminConfig) -> Result<Self, StoreError> {
        let store = CatalogStore::open(
            &config.data_dir,
            CacheOptions {
                time_to_live: config.cache_ttl,
            },
        )?;
        Ok(Self::new(config, store))
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub fn auth(&self) -> &AdminAuthService {
        &self.inner.auth
    }

    /// Get a reference to the product manager.
    #[must_use]
    pub fn products(&self) -> &ProductManager {
        &self.inner.products
    }
}
