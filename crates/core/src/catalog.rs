//! Catalog filtering shared by the storefront and the admin list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Category, CategoryId, Product};

/// Storefront category selection.
///
/// Parsed from the `category` query parameter: `"all"` (or nothing) selects
/// every active product, any other value is treated as a category id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Query parameter value meaning "no filter".
    pub const ALL: &'static str = "all";

    /// Parse a filter from a raw query value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL {
            Self::All
        } else {
            Self::Category(CategoryId::new(value))
        }
    }

    /// Whether a product passes this filter (ignores the active flag).
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => product.in_category(id),
        }
    }

    /// Whether this filter selects the given category tab.
    #[must_use]
    pub fn is_selected(&self, category_id: &CategoryId) -> bool {
        matches!(self, Self::Category(id) if id == category_id)
    }

    /// The query parameter value for this filter.
    #[must_use]
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Category(id) => id.as_str(),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_query_value())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Products shown on the storefront: active and passing the filter.
///
/// Storage order is preserved.
#[must_use]
pub fn visible_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.is_active)
        .filter(|p| filter.matches(p))
        .collect()
}

/// Categories shown as storefront tabs.
#[must_use]
pub fn active_categories(categories: &[Category]) -> Vec<&Category> {
    categories.iter().filter(|c| c.is_active).collect()
}

/// Admin search: case-insensitive substring match on the product name.
///
/// An empty (or whitespace-only) query matches everything.
#[must_use]
pub fn search_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a category's display name, if the id resolves.
#[must_use]
pub fn category_name<'a>(categories: &'a [Category], id: &CategoryId) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
}
