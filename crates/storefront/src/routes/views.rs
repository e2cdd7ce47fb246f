//! Display structs shared by storefront templates.
//!
//! Everything is preformatted here so templates stay free of logic.

use luxe_core::{CategoryFilter, ContactLink, FooterContent, Product, SiteContent, Testimonial};

use crate::services::catalog::StorefrontCatalog;

/// Header and footer data present on every page.
#[derive(Clone)]
pub struct PageChrome {
    pub brand_name: String,
    pub footer_text: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub tiktok_url: String,
    /// Floating chat button target.
    pub enquiry_url: String,
    pub year: i32,
}

impl PageChrome {
    pub fn new(site: &SiteContent, footer: &FooterContent) -> Self {
        use chrono::Datelike;

        Self {
            brand_name: site.brand_name.clone(),
            footer_text: footer.text.clone(),
            instagram_url: footer.social_links.instagram.clone(),
            facebook_url: footer.social_links.facebook.clone(),
            tiktok_url: footer.social_links.tiktok.clone(),
            enquiry_url: ContactLink::enquiry(site).url(),
            year: chrono::Utc::now().year(),
        }
    }
}

/// A product tile in the landing page grid.
#[derive(Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub weight: String,
    pub image_url: String,
    pub badge: Option<String>,
    pub order_url: String,
}

impl ProductCard {
    pub fn new(product: &Product, site: &SiteContent) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            weight: product.weight.clone().unwrap_or_default(),
            image_url: product.image_url.clone(),
            badge: product.badge.map(|b| b.as_str().to_string()),
            order_url: ContactLink::order(site, product).url(),
        }
    }
}

/// A customer quote card.
#[derive(Clone)]
pub struct TestimonialCard {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar_url: String,
}

impl From<Testimonial> for TestimonialCard {
    fn from(t: Testimonial) -> Self {
        Self {
            name: t.name,
            role: t.role,
            quote: t.quote,
            avatar_url: t.avatar_url,
        }
    }
}

/// A category filter tab.
#[derive(Clone)]
pub struct CategoryTab {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

impl CategoryTab {
    /// The "all products" tab followed by one tab per active category.
    pub fn build(catalog: &StorefrontCatalog, filter: &CategoryFilter) -> Vec<Self> {
        let all = Self {
            label: "Semua".to_string(),
            href: format!("/?category={}", CategoryFilter::ALL),
            selected: *filter == CategoryFilter::All,
        };

        std::iter::once(all)
            .chain(catalog.tabs().into_iter().map(|category| Self {
                label: category.name.clone(),
                href: format!("/?category={}", urlencoding::encode(category.id.as_str())),
                selected: filter.is_selected(&category.id),
            }))
            .collect()
    }
}

/// Everything the product detail page shows.
#[derive(Clone)]
pub struct ProductDetail {
    pub card: ProductCard,
    pub long_description: String,
    pub ingredients: Option<String>,
    pub usage: Option<String>,
    pub category_name: Option<String>,
}

impl ProductDetail {
    pub fn new(product: &Product, catalog: &StorefrontCatalog) -> Self {
        Self {
            card: ProductCard::new(product, &catalog.site),
            long_description: product
                .long_description
                .clone()
                .unwrap_or_else(|| product.description.clone()),
            ingredients: product.ingredients.clone(),
            usage: product.usage.clone(),
            category_name: catalog.category_name(product).map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_store::CatalogStore;

    fn seeded() -> StorefrontCatalog {
        StorefrontCatalog::load(&CatalogStore::in_memory()).expect("seed catalog loads")
    }

    #[test]
    fn test_product_card_formats_price_and_order_link() {
        let catalog = seeded();
        let product = catalog.products.first().expect("seed product");
        let card = ProductCard::new(product, &catalog.site);

        assert_eq!(card.price, "IDR 450,000");
        assert_eq!(card.badge.as_deref(), Some("Best Seller"));
        assert!(card.order_url.starts_with("https://wa.me/6281234567890?text=Halo%2C%20saya%20ingin%20memesan%20"));
    }

    #[test]
    fn test_tabs_mark_selected_category() {
        let catalog = seeded();
        let tabs = CategoryTab::build(&catalog, &CategoryFilter::parse("2"));

        assert_eq!(tabs.len(), 4);
        let selected: Vec<_> = tabs.iter().filter(|t| t.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected.first().map(|t| t.href.as_str()), Some("/?category=2"));
    }
}
