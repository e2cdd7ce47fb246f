//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use luxe_core::ProductId;

use crate::error::{AppError, Result};
use crate::routes::views::{PageChrome, ProductDetail};
use crate::services::catalog::StorefrontCatalog;
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: PageChrome,
    pub product: ProductDetail,
}

/// Display one active product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let catalog = StorefrontCatalog::load(state.store())?;
    let id = ProductId::new(id);

    let product = catalog
        .find_active(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        chrome: PageChrome::new(&catalog.site, &catalog.footer),
        product: ProductDetail::new(product, &catalog),
    })
}
