//! Overview page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use luxe_core::Product;

use crate::{
    error::Result, middleware::auth::RequireAdminAuth, models::CurrentAdmin, state::AppState,
};

/// Logged-in admin as shown in the sidebar.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub email: String,
    pub current_path: String,
}

impl AdminUserView {
    pub fn new(admin: &CurrentAdmin, current_path: &str) -> Self {
        Self {
            email: admin.email.clone(),
            current_path: current_path.to_string(),
        }
    }
}

/// Recently listed product on the overview.
#[derive(Debug, Clone)]
pub struct RecentProductView {
    pub name: String,
    pub image_url: String,
    pub price: String,
}

impl From<&Product> for RecentProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_user: AdminUserView,
    pub product_count: usize,
    pub active_category_count: usize,
    pub recent_products: Vec<RecentProductView>,
}

/// Overview page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    let overview = state.products().overview()?;

    Ok(DashboardTemplate {
        admin_user: AdminUserView::new(&admin, "/admin"),
        product_count: overview.product_count,
        active_category_count: overview.active_category_count,
        recent_products: overview.recent.iter().map(RecentProductView::from).collect(),
    })
}
