//! Product management for the admin panel.
//!
//! Every mutation loads the full product collection, changes it in memory,
//! and saves the whole collection back. There is no partial update, so
//! mutations hold a shared write lock from load to save.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use thiserror::Error;

use luxe_core::catalog::{active_categories, search_by_name};
use luxe_core::{Category, Product, ProductId};
use luxe_store::{CatalogStore, StoreError};

use crate::models::{FormErrors, ProductForm};

/// Number of products listed on the overview page.
pub const OVERVIEW_RECENT_COUNT: usize = 3;

/// Errors from catalog management operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("invalid product: {0}")]
    Validation(#[from] FormErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone)]
pub struct Overview {
    pub product_count: usize,
    pub active_category_count: usize,
    /// First products in stored order.
    pub recent: Vec<Product>,
}

/// Product list, search, and edit operations.
#[derive(Clone)]
pub struct ProductManager {
    store: CatalogStore,
    write_lock: Arc<Mutex<()>>,
}

impl ProductManager {
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Products whose name contains `query` (case-insensitive).
    ///
    /// A blank query lists everything.
    ///
    /// # Errors
    ///
    /// Returns `Store` if products cannot be read.
    pub fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self.store.get_products()?;
        Ok(search_by_name(&products, query).into_iter().cloned().collect())
    }

    /// All categories, active or not.
    ///
    /// # Errors
    ///
    /// Returns `Store` if categories cannot be read.
    pub fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.store.get_categories()?)
    }

    /// One product by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn get(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.store
            .get_products()?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Flip a product's visibility.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn toggle_active(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.modify(id, |product| product.is_active = !product.is_active)
    }

    /// Validate a form and append the new product.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the form is invalid.
    pub fn create(&self, form: &ProductForm) -> Result<Product, CatalogError> {
        let categories = self.store.get_categories()?;
        let product = form.validate(&categories)?.into_new_product(Utc::now());

        let _guard = self.lock_writes();
        let mut products = self.store.get_products()?;
        products.push(product.clone());
        self.store.save_products(&products)?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Validate a form and merge it into an existing product.
    ///
    /// The product keeps its id, creation time, and visibility.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id or `Validation` if the form is
    /// invalid.
    pub fn update(&self, id: &ProductId, form: &ProductForm) -> Result<Product, CatalogError> {
        let categories = self.store.get_categories()?;
        let input = form.validate(&categories)?;
        self.modify(id, |product| input.apply_to(product))
    }

    /// Remove exactly the product with this id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let _guard = self.lock_writes();
        let mut products = self.store.get_products()?;
        let index = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        let removed = products.remove(index);
        self.store.save_products(&products)?;

        tracing::info!(product_id = %removed.id, name = %removed.name, "Product deleted");
        Ok(removed)
    }

    /// Counts and leading products for the overview page.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the catalog cannot be read.
    pub fn overview(&self) -> Result<Overview, CatalogError> {
        let products = self.store.get_products()?;
        let categories = self.store.get_categories()?;

        Ok(Overview {
            product_count: products.len(),
            active_category_count: active_categories(&categories).len(),
            recent: products.into_iter().take(OVERVIEW_RECENT_COUNT).collect(),
        })
    }

    fn modify(
        &self,
        id: &ProductId,
        change: impl FnOnce(&mut Product),
    ) -> Result<Product, CatalogError> {
        let _guard = self.lock_writes();
        let mut products = self.store.get_products()?;
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        change(product);
        let updated = product.clone();
        self.store.save_products(&products)?;

        tracing::info!(product_id = %updated.id, is_active = updated.is_active, "Product updated");
        Ok(updated)
    }

    // A panic mid-mutation never saved, so the data behind a poisoned lock is intact
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ProductManager {
        ProductManager::new(CatalogStore::in_memory())
    }

    fn form(name: &str, category: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: "75000".to_string(),
            description: "Deskripsi".to_string(),
            category_id: category.to_string(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let manager = manager();

        let hits = manager.search("SERUM").expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|p| p.id.as_str()), Some("p2"));

        assert_eq!(manager.search("").expect("search").len(), 3);
        assert!(manager.search("shampoo").expect("search").is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let manager = manager();
        let id = ProductId::from("p1");
        let before = manager.get(&id).expect("p1").is_active;

        let once = manager.toggle_active(&id).expect("toggle");
        assert_eq!(once.is_active, !before);
        assert_eq!(manager.get(&id).expect("p1").is_active, !before);

        manager.toggle_active(&id).expect("toggle");
        assert_eq!(manager.get(&id).expect("p1").is_active, before);
    }

    #[test]
    fn test_toggle_unknown_is_not_found() {
        let result = manager().toggle_active(&ProductId::from("nope"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_create_appends_active_product() {
        let manager = manager();

        let created = manager.create(&form("Aloe Gel", "2")).expect("create");

        let all = manager.search("").expect("list");
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&created));
        assert!(created.is_active);
        assert!(created.id.as_str().starts_with('p'));
    }

    #[test]
    fn test_create_rejects_invalid_form() {
        let manager = manager();

        let result = manager.create(&form("", "2"));

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(manager.search("").expect("list").len(), 3);
    }

    #[test]
    fn test_update_preserves_created_at_and_id() {
        let manager = manager();
        let id = ProductId::from("p3");
        let before = manager.get(&id).expect("p3");

        let updated = manager.update(&id, &form("Velvet Lip", "3")).expect("update");

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.name, "Velvet Lip");
        assert_eq!(manager.get(&id).expect("p3"), updated);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let manager = manager();
        let before = manager.search("").expect("list");

        let removed = manager.delete(&ProductId::from("p2")).expect("delete");

        let after = manager.search("").expect("list");
        assert_eq!(removed.id.as_str(), "p2");
        assert_eq!(after.len(), before.len() - 1);
        let expected: Vec<_> = before.into_iter().filter(|p| p.id.as_str() != "p2").collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_delete_unknown_leaves_catalog_untouched() {
        let manager = manager();
        let result = manager.delete(&ProductId::from("p404"));

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(manager.search("").expect("list").len(), 3);
    }

    #[test]
    fn test_concurrent_creates_are_all_kept() {
        const THREADS: usize = 16;
        const PER_THREAD: usize = 20;
        let manager = manager();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let manager = manager.clone();
                scope.spawn(move || {
                    for i in 0..PER_THREAD {
                        manager
                            .create(&form(&format!("Produk {t}-{i}"), "1"))
                            .expect("create");
                    }
                });
            }
        });

        assert_eq!(
            manager.search("").expect("list").len(),
            3 + THREADS * PER_THREAD
        );
    }

    #[test]
    fn test_concurrent_toggles_and_deletes_do_not_clobber() {
        let manager = manager();
        let created: Vec<Product> = (0..10)
            .map(|i| manager.create(&form(&format!("Sementara {i}"), "2")).expect("create"))
            .collect();

        std::thread::scope(|scope| {
            for product in &created {
                let manager = manager.clone();
                scope.spawn(move || manager.delete(&product.id).expect("delete"));
            }
            let manager = manager.clone();
            scope.spawn(move || {
                for _ in 0..10 {
                    manager.toggle_active(&ProductId::from("p1")).expect("toggle");
                }
            });
        });

        let remaining = manager.search("").expect("list");
        assert_eq!(remaining.len(), 3);
        assert!(manager.get(&ProductId::from("p1")).expect("p1").is_active);
    }

    #[test]
    fn test_overview_counts() {
        let manager = manager();
        manager.create(&form("Extra", "1")).expect("create");

        let overview = manager.overview().expect("overview");

        assert_eq!(overview.product_count, 4);
        assert_eq!(overview.active_category_count, 3);
        assert_eq!(overview.recent.len(), OVERVIEW_RECENT_COUNT);
    }
}
