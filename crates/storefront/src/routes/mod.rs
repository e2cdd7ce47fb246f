//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page (?category=all|<id>)
//! GET  /products/{id}          - Product detail
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog readable)
//! *                            - Anything else redirects to /
//! ```

pub mod home;
pub mod products;
pub mod views;

use axum::{Router, response::Redirect, routing::get};

use crate::state::AppState;

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products/{id}", get(products::show))
        .fallback(fallback)
}

/// Unknown paths go back to the landing page.
async fn fallback() -> Redirect {
    Redirect::to("/")
}
