//! Built-in records returned when nothing has been persisted yet.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{
    Badge, Category, CategoryId, FooterContent, Price, Product, ProductId, SiteContent,
    SocialLinks, Testimonial,
};

/// Timestamp stamped on seed products.
///
/// Fixed so that repeated seed reads compare equal.
#[must_use]
pub fn seed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Default landing page content.
#[must_use]
pub fn site_content() -> SiteContent {
    SiteContent {
        hero_title: "Elegansi Abadi untuk Penampilan Anda".to_string(),
        hero_subtitle: "Temukan koleksi parfum premium dan skincare organik terbaik yang dirancang khusus untuk kulit tropis.".to_string(),
        cta_text: "Hubungi Kami".to_string(),
        whatsapp_number: "6281234567890".to_string(),
        about_text: "Berdiri sejak 2020, kami berkomitmen menghadirkan produk kecantikan berkualitas tinggi dengan bahan alami terbaik. Setiap produk kami melewati kontrol kualitas ketat untuk memastikan kepuasan Anda.".to_string(),
        brand_name: "LUXE & BEAUTY".to_string(),
    }
}

/// Default footer.
#[must_use]
pub fn footer() -> FooterContent {
    FooterContent {
        text: "Kualitas Premium, Keanggunan yang Terjangkau.".to_string(),
        social_links: SocialLinks {
            instagram: "https://instagram.com/brand".to_string(),
            facebook: "https://facebook.com/brand".to_string(),
            tiktok: "https://tiktok.com/@brand".to_string(),
        },
    }
}

/// Default categories: Perfume, Skincare, Cosmetic.
#[must_use]
pub fn categories() -> Vec<Category> {
    [("1", "Perfume", "perfume"), ("2", "Skincare", "skincare"), ("3", "Cosmetic", "cosmetic")]
        .into_iter()
        .map(|(id, name, slug)| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            slug: slug.to_string(),
            is_active: true,
        })
        .collect()
}

/// Default products, one per seed category.
#[must_use]
pub fn products() -> Vec<Product> {
    let created_at = seed_timestamp();
    vec![
        Product {
            id: ProductId::new("p1"),
            name: "Midnight Rose Eau de Parfum".to_string(),
            price: Price::new(450_000),
            description: "Wangi floral yang dalam dengan sentuhan vanilla dan musk.".to_string(),
            long_description: Some("Midnight Rose adalah mahakarya wewangian yang menggabungkan kesegaran mawar Bulgaria dengan kehangatan kayu cendana. Cocok untuk penggunaan malam hari dan acara formal.".to_string()),
            ingredients: Some("Alcohol Denat, Aqua, Fragrance, Bulgarian Rose Oil, Sandalwood Extract, Musk.".to_string()),
            usage: Some("Semprotkan pada titik nadi seperti pergelangan tangan dan leher dari jarak 15cm.".to_string()),
            weight: Some("50ml".to_string()),
            image_url: "https://images.unsplash.com/photo-1594035910387-fea47794261f?auto=format&fit=crop&q=80&w=800".to_string(),
            category_id: CategoryId::new("1"),
            is_active: true,
            created_at,
            badge: Some(Badge::BestSeller),
        },
        Product {
            id: ProductId::new("p2"),
            name: "Glowing Serum Vitamin C".to_string(),
            price: Price::new(185_000),
            description: "Serum mencerahkan kulit dan melindungi dari radikal bebas.".to_string(),
            long_description: Some("Diformulasikan dengan 10% L-Ascorbic Acid murni untuk mencerahkan noda hitam dan meratakan warna kulit. Mengandung antioksidan tinggi.".to_string()),
            ingredients: Some("Aqua, Glycerin, 10% Vitamin C, Ferulic Acid, Hyaluronic Acid, Aloe Vera.".to_string()),
            usage: Some("Gunakan 2-3 tetes pada wajah yang bersih di pagi dan malam hari sebelum pelembab.".to_string()),
            weight: Some("30ml".to_string()),
            image_url: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?auto=format&fit=crop&q=80&w=800".to_string(),
            category_id: CategoryId::new("2"),
            is_active: true,
            created_at,
            badge: Some(Badge::New),
        },
        Product {
            id: ProductId::new("p3"),
            name: "Matte Liquid Lipstick - Rouge".to_string(),
            price: Price::new(95_000),
            description: "Lipstick tahan lama dengan hasil akhir matte sempurna.".to_string(),
            long_description: Some("Lipstick cair dengan pigmentasi tinggi yang tidak membuat bibir kering. Tahan hingga 12 jam tanpa transfer.".to_string()),
            ingredients: Some("Isododecane, Trimethylsiloxysilicate, Vitamin E, Jojoba Oil, Pigments.".to_string()),
            usage: Some("Aplikasikan merata pada bibir. Biarkan mengering selama 30 detik untuk hasil matte maksimal.".to_string()),
            weight: Some("5g".to_string()),
            image_url: "https://images.unsplash.com/photo-1586776977607-310e9c725c37?auto=format&fit=crop&q=80&w=800".to_string(),
            category_id: CategoryId::new("3"),
            is_active: true,
            created_at,
            badge: None,
        },
    ]
}

/// Customer quotes for the landing page.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Siska Amelia",
            "Makeup Artist",
            "Parfumnya tahan seharian! Benar-benar sesuai ekspektasi saya untuk acara formal.",
            "siska",
        ),
        (
            "Rendra Putra",
            "Digital Creator",
            "Serumnya ringan sekali, tidak lengket sama sekali. Kulit jadi lebih sehat dalam 2 minggu.",
            "rendra",
        ),
        (
            "Linda Sari",
            "Entrepreneur",
            "Packagingnya mewah, pengiriman cepat. Bakal langganan terus di sini karena kualitasnya.",
            "linda",
        ),
    ]
    .into_iter()
    .map(|(name, role, quote, avatar)| Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        quote: quote.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?u={avatar}"),
    })
    .collect()
}

/// Image used for new products until the admin sets one.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1594035910387-fea47794261f?auto=format&fit=crop&q=80&w=800";
