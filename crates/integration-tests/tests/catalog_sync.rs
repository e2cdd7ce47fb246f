//! Admin edits reflected on the storefront.

use axum::http::StatusCode;
use luxe_integration_tests::TestContext;

#[tokio::test]
async fn test_created_product_appears_under_its_category() {
    let ctx = TestContext::new();
    let cookie = ctx.login().await.expect("login");

    let response = ctx
        .admin_post(
            "/admin/products",
            "name=Hydra+Cream&price=125000&description=Pelembap+harian&category_id=2&weight=30ml&badge=New",
            Some(&cookie),
        )
        .await
        .expect("create");
    assert_eq!(response.location.as_deref(), Some("/admin/products"));

    let skincare = ctx.storefront_get("/?category=2").await.expect("home");
    assert_eq!(skincare.status, StatusCode::OK);
    assert!(skincare.body.contains("Hydra Cream"));
    assert!(skincare.body.contains("IDR 125,000"));
    assert!(skincare.body.contains("Glowing Serum Vitamin C"));
    assert!(!skincare.body.contains("Midnight Rose Eau de Parfum"));

    let fragrance = ctx.storefront_get("/?category=1").await.expect("home");
    assert!(!fragrance.body.contains("Hydra Cream"));
}

#[tokio::test]
async fn test_hidden_product_leaves_storefront_but_stays_in_admin() {
    let ctx = TestContext::new();
    let cookie = ctx.login().await.expect("login");

    ctx.admin_post("/admin/products/p2/toggle", "q=", Some(&cookie))
        .await
        .expect("toggle");

    let home = ctx.storefront_get("/").await.expect("home");
    assert!(!home.body.contains("Glowing Serum Vitamin C"));
    assert!(home.body.contains("Midnight Rose Eau de Parfum"));

    let detail = ctx.storefront_get("/products/p2").await.expect("detail");
    assert_eq!(detail.status, StatusCode::NOT_FOUND);

    let list = ctx
        .admin_get("/admin/products", Some(&cookie))
        .await
        .expect("list");
    assert!(list.body.contains("Glowing Serum Vitamin C"));
    assert!(list.body.contains("Tersembunyi"));

    ctx.admin_post("/admin/products/p2/toggle", "q=", Some(&cookie))
        .await
        .expect("toggle back");
    let detail = ctx.storefront_get("/products/p2").await.expect("detail");
    assert_eq!(detail.status, StatusCode::OK);
}

#[tokio::test]
async fn test_edit_updates_detail_page() {
    let ctx = TestContext::new();
    let cookie = ctx.login().await.expect("login");

    ctx.admin_post(
        "/admin/products/p3",
        "name=Matte+Liquid+Lipstick+-+Nude&price=99000&description=Warna+nude&category_id=3&badge=Bestseller&ingredients=Vitamin+E",
        Some(&cookie),
    )
    .await
    .expect("update");

    let detail = ctx.storefront_get("/products/p3").await.expect("detail");
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Matte Liquid Lipstick - Nude"));
    assert!(detail.body.contains("IDR 99,000"));
    assert!(detail.body.contains("Vitamin E"));
}

#[tokio::test]
async fn test_deleted_product_is_gone_everywhere() {
    let ctx = TestContext::new();
    let cookie = ctx.login().await.expect("login");

    let response = ctx
        .admin_post("/admin/products/p1/delete", "confirm=yes", Some(&cookie))
        .await
        .expect("delete");
    assert_eq!(response.location.as_deref(), Some("/admin/products"));

    let home = ctx.storefront_get("/").await.expect("home");
    assert!(!home.body.contains("Midnight Rose Eau de Parfum"));
    assert_eq!(
        ctx.storefront_get("/products/p1").await.expect("detail").status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(ctx.store.get_products().expect("products").len(), 2);
}

#[tokio::test]
async fn test_storefront_order_link_names_product() {
    let ctx = TestContext::new();

    let detail = ctx.storefront_get("/products/p1").await.expect("detail");

    assert!(detail.body.contains("https://wa.me/"));
    assert!(detail.body.contains("Midnight%20Rose%20Eau%20de%20Parfum"));
}
