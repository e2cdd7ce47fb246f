//! Whole-catalog export format.

use serde::{Deserialize, Serialize};

use luxe_core::{Category, FooterContent, Product, SiteContent};

/// All four collections in one document (auth is never exported).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub site_content: SiteContent,
    pub footer: FooterContent,
}

impl CatalogSnapshot {
    /// The built-in seed catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: luxe_core::seed::products(),
            categories: luxe_core::seed::categories(),
            site_content: luxe_core::seed::site_content(),
            footer: luxe_core::seed::footer(),
        }
    }
}
