//! Typed catalog store with seed fallback and caching.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;

use luxe_core::{AuthToken, Category, FooterContent, Product, SiteContent, seed};

use crate::backend::{MemoryBackend, StorageBackend};
use crate::error::{Result, StoreError};
use crate::file::FileBackend;
use crate::keys::StorageKey;
use crate::snapshot::CatalogSnapshot;

/// Cache behaviour for a [`CatalogStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheOptions {
    /// Drop cached values after this long, so that writes made by another
    /// process sharing the same backend become visible. `None` keeps values
    /// until this store writes them or [`CatalogStore::reload`] is called.
    pub time_to_live: Option<Duration>,
}

/// Catalog persistence shared by the storefront, the admin panel, and the CLI.
///
/// Cheaply cloneable; clones share the backend and the cache.
#[derive(Clone)]
pub struct CatalogStore {
    backend: Arc<dyn StorageBackend>,
    /// Raw JSON per key; `None` records that the key is absent.
    cache: Cache<StorageKey, Option<String>>,
}

impl CatalogStore {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, options: CacheOptions) -> Self {
        let mut builder = Cache::builder().max_capacity(StorageKey::ALL.len() as u64);
        if let Some(ttl) = options.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            backend,
            cache: builder.build(),
        }
    }

    /// A store over a fresh [`MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), CacheOptions::default())
    }

    /// A store over a [`FileBackend`] rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>, options: CacheOptions) -> Result<Self> {
        let backend = FileBackend::open(dir)?;
        Ok(Self::new(Arc::new(backend), options))
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Persisted products, or the seed products if none were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is malformed.
    pub fn get_products(&self) -> Result<Vec<Product>> {
        self.load(StorageKey::Products, seed::products)
    }

    /// Replace the product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_products(&self, products: &[Product]) -> Result<()> {
        self.store(StorageKey::Products, products)?;
        tracing::info!(count = products.len(), "Saved products");
        Ok(())
    }

    /// Persisted categories, or the seed categories if none were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is malformed.
    pub fn get_categories(&self) -> Result<Vec<Category>> {
        self.load(StorageKey::Categories, seed::categories)
    }

    /// Replace the category collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.store(StorageKey::Categories, categories)?;
        tracing::info!(count = categories.len(), "Saved categories");
        Ok(())
    }

    /// Persisted site content, or the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is malformed.
    pub fn get_site_content(&self) -> Result<SiteContent> {
        self.load(StorageKey::SiteContent, seed::site_content)
    }

    /// Replace the site content.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_site_content(&self, content: &SiteContent) -> Result<()> {
        self.store(StorageKey::SiteContent, content)
    }

    /// Persisted footer, or the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is malformed.
    pub fn get_footer(&self) -> Result<FooterContent> {
        self.load(StorageKey::Footer, seed::footer)
    }

    /// Replace the footer.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_footer(&self, footer: &FooterContent) -> Result<()> {
        self.store(StorageKey::Footer, footer)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Store (`Some`) or clear (`None`) the admin auth token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn set_auth(&self, token: Option<&AuthToken>) -> Result<()> {
        match token {
            Some(token) => self.store(StorageKey::Auth, token),
            None => self.clear(StorageKey::Auth),
        }
    }

    /// The stored auth token, if any. There is no seed for this key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is malformed.
    pub fn get_auth(&self) -> Result<Option<AuthToken>> {
        self.read_raw(StorageKey::Auth)?
            .map(|raw| decode(StorageKey::Auth, &raw))
            .transpose()
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// All four collections as one document.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection fails to load.
    pub fn snapshot(&self) -> Result<CatalogSnapshot> {
        Ok(CatalogSnapshot {
            products: self.get_products()?,
            categories: self.get_categories()?,
            site_content: self.get_site_content()?,
            footer: self.get_footer()?,
        })
    }

    /// Overwrite all four collections from a snapshot.
    ///
    /// Each collection is its own write; a failure part way leaves the
    /// earlier collections replaced.
    ///
    /// # Errors
    ///
    /// Returns the first backend write failure.
    pub fn restore(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        self.save_categories(&snapshot.categories)?;
        self.save_products(&snapshot.products)?;
        self.save_site_content(&snapshot.site_content)?;
        self.save_footer(&snapshot.footer)?;
        Ok(())
    }

    /// Which keys currently hold a persisted value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn persisted_keys(&self) -> Result<Vec<StorageKey>> {
        let mut present = Vec::new();
        for key in StorageKey::ALL {
            if self.backend.read(key.as_str())?.is_some() {
                present.push(key);
            }
        }
        Ok(present)
    }

    /// Remove every key, so that reads fall back to seed data again.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    pub fn reset(&self) -> Result<()> {
        for key in StorageKey::ALL {
            self.clear(key)?;
        }
        tracing::info!("Store reset to seed data");
        Ok(())
    }

    /// Drop cached values; the next read of each key goes to the backend.
    pub fn reload(&self) {
        self.cache.invalidate_all();
    }

    // =========================================================================
    // Raw access
    // =========================================================================

    fn read_raw(&self, key: StorageKey) -> Result<Option<String>> {
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }
        let value = self.backend.read(key.as_str())?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    fn load<T, F>(&self, key: StorageKey, fallback: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.read_raw(key)? {
            Some(raw) => decode(key, &raw),
            None => {
                tracing::debug!(%key, "Nothing persisted, using seed data");
                Ok(fallback())
            }
        }
    }

    fn store<T>(&self, key: StorageKey, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw =
            serde_json::to_string(value).map_err(|source| StoreError::Serialize { key, source })?;
        self.backend.write(key.as_str(), &raw)?;
        self.cache.insert(key, Some(raw));
        Ok(())
    }

    fn clear(&self, key: StorageKey) -> Result<()> {
        self.backend.remove(key.as_str())?;
        self.cache.insert(key, None);
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(key: StorageKey, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| {
        tracing::error!(%key, error = %source, "Persisted data is malformed");
        StoreError::Malformed { key, source }
    })
}
