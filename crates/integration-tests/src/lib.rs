//! Integration tests for Luxe & Beauty.
//!
//! Both routers run in-process over one shared [`CatalogStore`], so a write
//! made through the admin panel is immediately visible to the storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_sync` - Admin edits reflected on the storefront
//! - `admin_login` - Login, logout, and token revocation
//! - `shared_data_dir` - Two stores over the same data directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use luxe_admin::config::AdminConfig;
use luxe_storefront::config::StorefrontConfig;
use luxe_store::CatalogStore;

/// Error type for test helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Email accepted by [`AdminConfig::default`].
pub const ADMIN_EMAIL: &str = "admin@brand.com";
/// Password accepted by [`AdminConfig::default`].
pub const ADMIN_PASSWORD: &str = "admin123";

/// A response with its body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub set_cookie: Option<String>,
    pub body: String,
}

impl TestResponse {
    async fn collect(response: Response<Body>) -> Result<Self, BoxError> {
        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let status = response.status();
        let location = header_value(header::LOCATION);
        let set_cookie = header_value(header::SET_COOKIE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;

        Ok(Self {
            status,
            location,
            set_cookie,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// `name=value` part of the session cookie, if one was set.
    #[must_use]
    pub fn cookie_pair(&self) -> Option<String> {
        self.set_cookie
            .as_deref()
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }
}

/// Storefront and admin routers sharing one catalog.
pub struct TestContext {
    pub store: CatalogStore,
    pub storefront: Router,
    pub admin: Router,
}

impl TestContext {
    /// Both sites over a fresh in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stores(CatalogStore::in_memory(), None)
    }

    /// Both sites, optionally giving the storefront its own store.
    #[must_use]
    pub fn with_stores(admin_store: CatalogStore, storefront_store: Option<CatalogStore>) -> Self {
        let storefront_store = storefront_store.unwrap_or_else(|| admin_store.clone());

        let admin_config = AdminConfig {
            login_delay: Duration::ZERO,
            ..AdminConfig::default()
        };
        let admin = luxe_admin::app(luxe_admin::state::AppState::new(
            admin_config,
            admin_store.clone(),
        ));
        let storefront = luxe_storefront::app(luxe_storefront::state::AppState::new(
            StorefrontConfig::default(),
            storefront_store,
        ));

        Self {
            store: admin_store,
            storefront,
            admin,
        }
    }

    /// GET a storefront page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body read.
    pub async fn storefront_get(&self, uri: &str) -> Result<TestResponse, BoxError> {
        send(&self.storefront, get_request(uri, None)?).await
    }

    /// GET an admin page with an optional session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body read.
    pub async fn admin_get(&self, uri: &str, cookie: Option<&str>) -> Result<TestResponse, BoxError> {
        send(&self.admin, get_request(uri, cookie)?).await
    }

    /// POST a url-encoded form to the admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body read.
    pub async fn admin_post(
        &self,
        uri: &str,
        form: &str,
        cookie: Option<&str>,
    ) -> Result<TestResponse, BoxError> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        send(&self.admin, builder.body(Body::from(form.to_string()))?).await
    }

    /// Log in with the default account and return the session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is rejected.
    pub async fn login(&self) -> Result<String, BoxError> {
        let form = format!("email={}&password={ADMIN_PASSWORD}", ADMIN_EMAIL.replace('@', "%40"));
        let response = self.admin_post("/admin/login", &form, None).await?;

        if response.location.as_deref() != Some("/admin") {
            return Err(format!("login rejected with {}", response.status).into());
        }
        response
            .cookie_pair()
            .ok_or_else(|| "login did not set a session cookie".into())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn get_request(uri: &str, cookie: Option<&str>) -> Result<Request<Body>, BoxError> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(builder.body(Body::empty())?)
}

async fn send(router: &Router, request: Request<Body>) -> Result<TestResponse, BoxError> {
    let response = router.clone().oneshot(request).await?;
    TestResponse::collect(response).await
}
