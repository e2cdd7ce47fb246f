//! Read-only view of the catalog for one storefront request.
//!
//! Every request loads the four collections fresh (through the store's
//! cache) so admin edits show up without a restart.

use luxe_core::catalog::{active_categories, category_name, visible_products};
use luxe_core::{Category, CategoryFilter, FooterContent, Product, ProductId, SiteContent};
use luxe_store::{CatalogStore, Result};

/// The collections a storefront page renders from.
#[derive(Debug, Clone)]
pub struct StorefrontCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub site: SiteContent,
    pub footer: FooterContent,
}

impl StorefrontCatalog {
    /// Load all collections from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection is unreadable or malformed.
    pub fn load(store: &CatalogStore) -> Result<Self> {
        Ok(Self {
            products: store.get_products()?,
            categories: store.get_categories()?,
            site: store.get_site_content()?,
            footer: store.get_footer()?,
        })
    }

    /// Active products passing the category filter, in stored order.
    #[must_use]
    pub fn visible(&self, filter: &CategoryFilter) -> Vec<&Product> {
        visible_products(&self.products, filter)
    }

    /// Categories offered as filter tabs.
    #[must_use]
    pub fn tabs(&self) -> Vec<&Category> {
        active_categories(&self.categories)
    }

    /// Look up an active product by id. Inactive products are hidden.
    #[must_use]
    pub fn find_active(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id && p.is_active)
    }

    /// Display name of a product's category, if the category still exists.
    #[must_use]
    pub fn category_name(&self, product: &Product) -> Option<&str> {
        category_name(&self.categories, &product.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::CategoryId;

    fn seeded() -> StorefrontCatalog {
        StorefrontCatalog::load(&CatalogStore::in_memory()).expect("seed catalog loads")
    }

    #[test]
    fn test_load_falls_back_to_seed() {
        let catalog = seeded();
        assert_eq!(catalog.products.len(), 3);
        assert_eq!(catalog.categories.len(), 3);
    }

    #[test]
    fn test_find_active_hides_inactive_products() {
        let store = CatalogStore::in_memory();
        let mut products = store.get_products().expect("products");
        if let Some(first) = products.first_mut() {
            first.is_active = false;
        }
        store.save_products(&products).expect("save");

        let catalog = StorefrontCatalog::load(&store).expect("load");
        assert!(catalog.find_active(&ProductId::from("p1")).is_none());
        assert!(catalog.find_active(&ProductId::from("p2")).is_some());
        assert!(catalog.find_active(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn test_visible_with_unknown_category_is_empty() {
        let catalog = seeded();
        let filter = CategoryFilter::Category(CategoryId::from("does-not-exist"));
        assert!(catalog.visible(&filter).is_empty());
    }

    #[test]
    fn test_category_name_for_product() {
        let catalog = seeded();
        let product = catalog
            .find_active(&ProductId::from("p1"))
            .expect("p1 is active");
        assert!(catalog.category_name(product).is_some());
    }
}
