//! Product create/edit form and its validation.

use std::fmt;

use serde::Deserialize;

use luxe_core::seed::DEFAULT_PRODUCT_IMAGE;
use luxe_core::{Badge, Category, CategoryId, Price, Product, ProductId};

/// Raw form submission, exactly as posted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub long_description: String,
    pub ingredients: String,
    pub usage: String,
    pub weight: String,
    pub image_url: String,
    pub category_id: String,
    pub badge: String,
}

impl ProductForm {
    /// Blank form for a new product.
    #[must_use]
    pub fn blank(categories: &[Category]) -> Self {
        Self {
            price: "0".to_string(),
            image_url: DEFAULT_PRODUCT_IMAGE.to_string(),
            category_id: default_category(categories).into_inner(),
            ..Self::default()
        }
    }

    /// Form pre-filled from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.amount().to_string(),
            description: product.description.clone(),
            long_description: product.long_description.clone().unwrap_or_default(),
            ingredients: product.ingredients.clone().unwrap_or_default(),
            usage: product.usage.clone().unwrap_or_default(),
            weight: product.weight.clone().unwrap_or_default(),
            image_url: product.image_url.clone(),
            category_id: product.category_id.to_string(),
            badge: product.badge.map(|b| b.as_str().to_string()).unwrap_or_default(),
        }
    }

    /// Validate and normalise the submission.
    ///
    /// # Errors
    ///
    /// Returns every field problem found, not just the first.
    pub fn validate(&self, categories: &[Category]) -> Result<ProductInput, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Nama produk wajib diisi.");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", "Deskripsi singkat wajib diisi.");
        }

        let price = Price::parse(&self.price).unwrap_or_else(|e| {
            errors.push("price", format!("Harga tidak valid: {e}."));
            Price::default()
        });

        let badge = Badge::parse_optional(&self.badge).unwrap_or_else(|e| {
            errors.push("badge", e.to_string());
            None
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        let category_id = match self.category_id.trim() {
            "" => default_category(categories),
            id => CategoryId::new(id),
        };

        let image_url = match self.image_url.trim() {
            "" => DEFAULT_PRODUCT_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(ProductInput {
            name: name.to_string(),
            price,
            description: description.to_string(),
            long_description: optional(&self.long_description),
            ingredients: optional(&self.ingredients),
            usage: optional(&self.usage),
            weight: optional(&self.weight),
            image_url,
            category_id,
            badge,
        })
    }
}

/// Validated product fields the admin can edit.
///
/// `id`, `createdAt` and `isActive` are not form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub long_description: Option<String>,
    pub ingredients: Option<String>,
    pub usage: Option<String>,
    pub weight: Option<String>,
    pub image_url: String,
    pub category_id: CategoryId,
    pub badge: Option<Badge>,
}

impl ProductInput {
    /// A new active product with a fresh id, created at `created_at`.
    #[must_use]
    pub fn into_new_product(self, created_at: chrono::DateTime<chrono::Utc>) -> Product {
        Product {
            id: ProductId::generate(),
            name: self.name,
            price: self.price,
            description: self.description,
            long_description: self.long_description,
            ingredients: self.ingredients,
            usage: self.usage,
            weight: self.weight,
            image_url: self.image_url,
            category_id: self.category_id,
            is_active: true,
            created_at,
            badge: self.badge,
        }
    }

    /// Overwrite the editable fields of `product`, keeping its identity,
    /// creation time and visibility.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
        product.description = self.description;
        product.long_description = self.long_description;
        product.ingredients = self.ingredients;
        product.usage = self.usage;
        product.weight = self.weight;
        product.image_url = self.image_url;
        product.category_id = self.category_id;
        product.badge = self.badge;
    }
}

/// One problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All problems found in a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for one field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

fn default_category(categories: &[Category]) -> CategoryId {
    categories
        .first()
        .map_or_else(|| CategoryId::new("1"), |c| c.id.clone())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
