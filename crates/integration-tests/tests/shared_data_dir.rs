//! Two stores opened on the same data directory, as the two binaries are.

use axum::http::StatusCode;
use luxe_integration_tests::TestContext;
use luxe_store::{CacheOptions, CatalogStore};

fn open(dir: &std::path::Path) -> CatalogStore {
    CatalogStore::open(dir, CacheOptions::default()).expect("open store")
}

#[tokio::test]
async fn test_storefront_sees_admin_writes_after_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let admin_store = open(dir.path());
    let storefront_store = open(dir.path());
    let ctx = TestContext::with_stores(admin_store, Some(storefront_store.clone()));

    // Prime the storefront cache with seed data
    let before = ctx.storefront_get("/").await.expect("home");
    assert!(before.body.contains("Midnight Rose Eau de Parfum"));

    let cookie = ctx.login().await.expect("login");
    ctx.admin_post("/admin/products/p1/delete", "confirm=yes", Some(&cookie))
        .await
        .expect("delete");

    storefront_store.reload();

    let after = ctx.storefront_get("/").await.expect("home");
    assert!(!after.body.contains("Midnight Rose Eau de Parfum"));
}

#[tokio::test]
async fn test_malformed_file_fails_readiness() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("luxe_products.json"), "{not json").expect("write");
    let ctx = TestContext::with_stores(open(dir.path()), None);

    let ready = ctx.storefront_get("/health/ready").await.expect("ready");
    assert_eq!(ready.status, StatusCode::SERVICE_UNAVAILABLE);

    let home = ctx.storefront_get("/").await.expect("home");
    assert_eq!(home.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_untouched_directory_serves_seed_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = TestContext::with_stores(open(dir.path()), None);

    let home = ctx.storefront_get("/").await.expect("home");

    assert_eq!(home.status, StatusCode::OK);
    assert!(home.body.contains("Glowing Serum Vitamin C"));
    assert!(ctx.store.persisted_keys().expect("keys").is_empty());
}
