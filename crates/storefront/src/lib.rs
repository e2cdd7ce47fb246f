//! Luxe & Beauty storefront library.
//!
//! Read-only public site: landing page with category filter, product detail
//! pages, and WhatsApp order links. The router is exposed as a library so it
//! can be exercised in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Directory served under `/static`, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Build the complete storefront router (without Sentry layers).
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog cannot be read.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().get_products() {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use luxe_store::{CatalogStore, MemoryBackend, StorageBackend, StorageKey};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;

    fn test_app(store: CatalogStore) -> Router {
        app(AppState::new(StorefrontConfig::default(), store))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_home_lists_all_seed_products() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Midnight Rose Eau de Parfum"));
        assert!(body.contains("Glowing Serum Vitamin C"));
        assert!(body.contains("Matte Liquid Lipstick - Rouge"));
        assert!(body.contains("IDR 450,000"));
    }

    #[tokio::test]
    async fn test_home_shows_testimonials_and_product_enquiry() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Apa Kata Mereka?"));
        assert!(body.contains("Siska Amelia"));
        assert!(body.contains("Serumnya ringan sekali, tidak lengket sama sekali."));
        assert!(body.contains(
            "https://wa.me/6281234567890?text=Halo%2C%20saya%20ingin%20bertanya%20mengenai%20produk%20LUXE%20%26%20BEAUTY"
        ));
    }

    #[tokio::test]
    async fn test_home_filters_by_category() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/?category=2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Glowing Serum Vitamin C"));
        assert!(!body.contains("Midnight Rose Eau de Parfum"));
    }

    #[tokio::test]
    async fn test_home_unknown_category_renders_empty_grid() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/?category=nope").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Glowing Serum Vitamin C"));
    }

    #[tokio::test]
    async fn test_inactive_products_are_hidden() {
        let store = CatalogStore::in_memory();
        let mut products = store.get_products().expect("products");
        for product in &mut products {
            product.is_active = product.id.as_str() != "p2";
        }
        store.save_products(&products).expect("save");

        let (_, body) = get(test_app(store.clone()), "/").await;
        assert!(!body.contains("Glowing Serum Vitamin C"));

        let (status, _) = get(test_app(store), "/products/p2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_detail_shows_long_description_and_order_link() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/products/p1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("mawar Bulgaria"));
        assert!(body.contains("https://wa.me/6281234567890?text="));
        assert!(body.contains("Perfume"));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let (status, _) = get(test_app(CatalogStore::in_memory()), "/products/p404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_redirects_home() {
        let response = test_app(CatalogStore::in_memory())
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_server_error() {
        let backend = Arc::new(MemoryBackend::default());
        backend
            .write(StorageKey::Products.as_str(), "{not json")
            .expect("write");
        let store = CatalogStore::new(backend, luxe_store::CacheOptions::default());

        let (status, body) = get(test_app(store.clone()), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("not json"));

        let (status, _) = get(test_app(store), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(test_app(CatalogStore::in_memory()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
