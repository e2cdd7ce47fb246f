//! Luxe & Beauty catalog admin library.
//!
//! Password-protected panel for listing, searching, creating, editing,
//! toggling, and deleting products. The router is exposed as a library so it
//! can be exercised in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Directory served under `/static`, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/admin/static";

/// Build the complete admin router (without Sentry layers).
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .merge(routes::routes())
        .layer(session_layer)
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
    use axum::http::{Request, Response, header};
    use luxe_core::ProductId;
    use luxe_store::CatalogStore;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::config::AdminConfig;
    use crate::routes::auth::LOGIN_FAILED_MESSAGE;

    fn test_app(store: &CatalogStore) -> Router {
        let config = AdminConfig {
            login_delay: Duration::ZERO,
            ..AdminConfig::default()
        };
        app(AppState::new(config, store.clone()))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
        app.clone().oneshot(request).await.expect("response")
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).expect("request")
    }

    fn post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).expect("request")
    }

    fn location(response: &Response<Body>) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    fn session_cookie(response: &Response<Body>) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("session cookie")
            .to_string()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    async fn login(app: &Router) -> String {
        let response = send(
            app,
            post("/admin/login", "email=admin%40brand.com&password=admin123", None),
        )
        .await;
        assert_eq!(location(&response), Some("/admin"));
        session_cookie(&response)
    }

    #[tokio::test]
    async fn test_admin_requires_login() {
        let app = test_app(&CatalogStore::in_memory());

        let response = send(&app, get("/admin", None)).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), Some("/admin/login"));

        let response = send(&app, get("/admin/products", None)).await;
        assert_eq!(location(&response), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_wrong_credentials_show_message_and_set_no_token() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);

        let response = send(
            &app,
            post("/admin/login", "email=admin%40brand.com&password=nope", None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.contains(LOGIN_FAILED_MESSAGE));
        assert_eq!(store.get_auth().expect("read"), None);
    }

    #[tokio::test]
    async fn test_login_grants_access_and_logout_revokes_it() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);

        let cookie = login(&app).await;
        assert!(store.get_auth().expect("read").is_some());

        let response = send(&app, get("/admin", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Total Produk"));
        assert!(body.contains("Midnight Rose Eau de Parfum"));

        let response = send(&app, post("/admin/logout", "", Some(&cookie))).await;
        assert_eq!(location(&response), Some("/admin/login"));
        assert_eq!(store.get_auth().expect("read"), None);

        let response = send(&app, get("/admin", Some(&cookie))).await;
        assert_eq!(location(&response), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_anonymous_logout_leaves_admin_signed_in() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;
        let token = store.get_auth().expect("read");

        let response = send(&app, post("/admin/logout", "", None)).await;
        assert_eq!(location(&response), Some("/admin/login"));

        assert_eq!(store.get_auth().expect("read"), token);
        let response = send(&app, get("/admin", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cleared_token_signs_session_out() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;

        store.set_auth(None).expect("clear");

        let response = send(&app, get("/admin/products", Some(&cookie))).await;
        assert_eq!(location(&response), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_search_lists_matching_products() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;

        let response = send(&app, get("/admin/products?q=serum", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Glowing Serum Vitamin C"));
        assert!(!body.contains("Midnight Rose Eau de Parfum"));
    }

    #[tokio::test]
    async fn test_create_toggle_and_delete_product() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;

        let response = send(
            &app,
            post(
                "/admin/products",
                "name=Aloe+Gel&price=60000&description=Gel+lidah+buaya&category_id=2&badge=",
                Some(&cookie),
            ),
        )
        .await;
        assert_eq!(location(&response), Some("/admin/products"));

        let created = store
            .get_products()
            .expect("products")
            .into_iter()
            .find(|p| p.name == "Aloe Gel")
            .expect("created product");
        assert!(created.is_active);
        assert_eq!(created.category_id.as_str(), "2");

        let toggle_uri = format!("/admin/products/{}/toggle", created.id);
        send(&app, post(&toggle_uri, "q=", Some(&cookie))).await;
        let hidden = ProductManagerView::find(&store, &created.id);
        assert!(!hidden.is_active);

        let delete_uri = format!("/admin/products/{}/delete", created.id);
        let response = send(&app, post(&delete_uri, "", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.get_products().expect("products").len(), 4);

        let response = send(&app, post(&delete_uri, "confirm=yes", Some(&cookie))).await;
        assert_eq!(location(&response), Some("/admin/products"));
        assert_eq!(store.get_products().expect("products").len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rerendered_with_errors() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;

        let response = send(
            &app,
            post("/admin/products", "name=&price=abc&description=", Some(&cookie)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response).await.contains("Nama produk wajib diisi."));
        assert_eq!(store.get_products().expect("products").len(), 3);
    }

    #[tokio::test]
    async fn test_edit_keeps_created_at() {
        let store = CatalogStore::in_memory();
        let app = test_app(&store);
        let cookie = login(&app).await;
        let before = ProductManagerView::find(&store, &ProductId::from("p1"));

        let response = send(
            &app,
            post(
                "/admin/products/p1",
                "name=Midnight+Rose+Intense&price=500000&description=Baru&category_id=1&badge=Limited",
                Some(&cookie),
            ),
        )
        .await;
        assert_eq!(location(&response), Some("/admin/products"));

        let after = ProductManagerView::find(&store, &ProductId::from("p1"));
        assert_eq!(after.name, "Midnight Rose Intense");
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_unknown_product_edit_is_not_found() {
        let app = test_app(&CatalogStore::in_memory());
        let cookie = login(&app).await;

        let response = send(&app, get("/admin/products/p404/edit", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    struct ProductManagerView;

    impl ProductManagerView {
        fn find(store: &CatalogStore, id: &ProductId) -> luxe_core::Product {
            store
                .get_products()
                .expect("products")
                .into_iter()
                .find(|p| &p.id == id)
                .expect("product exists")
        }
    }
}
