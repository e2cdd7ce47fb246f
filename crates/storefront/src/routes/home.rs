//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use luxe_core::{CategoryFilter, ContactLink, seed};

use crate::error::Result;
use crate::routes::views::{CategoryTab, PageChrome, ProductCard, TestimonialCard};
use crate::services::catalog::StorefrontCatalog;
use crate::state::AppState;

/// Query parameters for the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub category: CategoryFilter,
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_text: String,
    pub consultation_url: String,
    pub about_text: String,
    pub tabs: Vec<CategoryTab>,
    pub products: Vec<ProductCard>,
    pub product_enquiry_url: String,
    pub testimonials: Vec<TestimonialCard>,
}

/// Display the landing page, optionally filtered to one category.
///
/// Unknown category ids render an empty grid.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate> {
    let catalog = StorefrontCatalog::load(state.store())?;

    let products: Vec<ProductCard> = catalog
        .visible(&query.category)
        .into_iter()
        .map(|product| ProductCard::new(product, &catalog.site))
        .collect();

    tracing::debug!(
        filter = query.category.as_query_value(),
        count = products.len(),
        "Rendering product grid"
    );

    Ok(HomeTemplate {
        chrome: PageChrome::new(&catalog.site, &catalog.footer),
        hero_title: catalog.site.hero_title.clone(),
        hero_subtitle: catalog.site.hero_subtitle.clone(),
        cta_text: catalog.site.cta_text.clone(),
        consultation_url: ContactLink::consultation(&catalog.site).url(),
        about_text: catalog.site.about_text.clone(),
        tabs: CategoryTab::build(&catalog, &query.category),
        products,
        product_enquiry_url: ContactLink::product_enquiry(&catalog.site).url(),
        testimonials: seed::testimonials().into_iter().map(Into::into).collect(),
    })
}
