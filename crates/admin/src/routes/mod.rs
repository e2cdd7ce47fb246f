//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /health/ready                 - Readiness check (catalog readable)
//! GET  /                             - Redirect to /admin
//!
//! # Auth
//! GET  /admin/login                  - Login page
//! POST /admin/login                  - Check credentials
//! POST /admin/logout                 - Logout
//!
//! # Overview
//! GET  /admin                        - Counts and first products
//!
//! # Products
//! GET  /admin/products?q=            - List and search
//! GET  /admin/products/new           - Create form
//! POST /admin/products               - Create
//! GET  /admin/products/{id}/edit     - Edit form
//! POST /admin/products/{id}          - Save edits
//! POST /admin/products/{id}/toggle   - Flip active/hidden
//! GET  /admin/products/{id}/delete   - Delete confirmation
//! POST /admin/products/{id}/delete   - Delete (requires confirm=yes)
//! ```

pub mod auth;
pub mod dashboard;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_page))
        .route("/{id}", post(products::update))
        .route("/{id}/edit", get(products::edit_page))
        .route("/{id}/toggle", post(products::toggle))
        .route(
            "/{id}/delete",
            get(products::delete_page).post(products::delete),
        )
}

/// Create all page routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/admin") }))
        .route("/admin", get(dashboard::index))
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", post(auth::logout))
        .nest("/admin/products", product_routes())
        .fallback(|| async { Redirect::to("/admin") })
}
