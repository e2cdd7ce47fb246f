//! The four persisted record shapes, plus the landing page testimonials.
//!
//! Field names serialise in camelCase and must match what is already in
//! storage; there is no schema version to migrate from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Badge, CategoryId, Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Short description shown on the product card.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Weight or volume label, e.g. `50ml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub image_url: String,
    /// Not enforced against the category collection.
    pub category_id: CategoryId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl Product {
    /// Whether the product belongs to the given category.
    #[must_use]
    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        &self.category_id == category_id
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

/// Landing page copy and contact configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_text: String,
    /// International format without `+`, e.g. `6281234567890`.
    pub whatsapp_number: String,
    pub about_text: String,
    pub brand_name: String,
}

/// Footer copy and social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub text: String,
    pub social_links: SocialLinks,
}

/// Social profile URLs shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub tiktok: String,
}

/// A customer quote on the landing page.
///
/// Testimonials are not persisted; the storefront renders [`crate::seed::testimonials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": "p9",
            "name": "Rose Water",
            "price": 50000,
            "description": "Toner",
            "imageUrl": "https://example.com/rose.jpg",
            "categoryId": "2",
            "isActive": true,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "badge": "New"
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product json");
        assert_eq!(product.id.as_str(), "p9");
        assert_eq!(product.price.amount(), 50_000);
        assert_eq!(product.badge, Some(Badge::New));
        assert!(product.weight.is_none());

        let value = serde_json::to_value(&product).expect("serializes");
        assert_eq!(value["categoryId"], "2");
        assert_eq!(value["isActive"], true);
        assert!(value.get("longDescription").is_none());
    }

    #[test]
    fn test_footer_wire_format() {
        let json = r#"{"text":"t","socialLinks":{"instagram":"i","facebook":"f","tiktok":"k"}}"#;
        let footer: FooterContent = serde_json::from_str(json).expect("valid footer json");
        assert_eq!(footer.social_links.tiktok, "k");
    }
}
