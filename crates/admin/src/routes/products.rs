//! Product management route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use luxe_core::catalog::category_name;
use luxe_core::{Badge, Category, Product, ProductId};

use crate::{
    error::{AppError, Result},
    middleware::auth::RequireAdminAuth,
    models::{FormErrors, ProductForm},
    services::CatalogError,
    state::AppState,
};

use super::dashboard::AdminUserView;

const PRODUCTS_PATH: &str = "/admin/products";

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Toggle form; carries the search so the list comes back filtered.
#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub q: String,
}

/// Delete confirmation form.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: String,
}

/// Product row for the list table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub weight: String,
    pub category: String,
    pub price: String,
    pub is_active: bool,
    pub has_badge: bool,
}

impl ProductRow {
    fn new(product: &Product, categories: &[Category]) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            weight: product
                .weight
                .clone()
                .unwrap_or_else(|| "Reguler".to_string()),
            category: category_name(categories, &product.category_id)
                .unwrap_or("Uncategorized")
                .to_string(),
            price: product.price.to_string(),
            is_active: product.is_active,
            has_badge: product.badge.is_some(),
        }
    }
}

/// Select option for the form.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Products list page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub admin_user: AdminUserView,
    pub products: Vec<ProductRow>,
    pub search_query: String,
}

/// Create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub admin_user: AdminUserView,
    pub title: String,
    pub action: String,
    pub form: ProductForm,
    pub categories: Vec<SelectOption>,
    pub badges: Vec<SelectOption>,
    pub errors: Vec<String>,
}

impl ProductFormTemplate {
    fn new(
        admin_user: AdminUserView,
        title: &str,
        action: String,
        form: ProductForm,
        categories: &[Category],
        errors: Option<&FormErrors>,
    ) -> Self {
        let categories = categories
            .iter()
            .map(|c| SelectOption {
                value: c.id.to_string(),
                label: c.name.clone(),
                selected: c.id.as_str() == form.category_id,
            })
            .collect();

        let badges = std::iter::once(SelectOption {
            value: String::new(),
            label: "Tidak ada label".to_string(),
            selected: form.badge.is_empty(),
        })
        .chain(Badge::ALL.iter().map(|b| SelectOption {
            value: b.as_str().to_string(),
            label: b.form_label().to_string(),
            selected: b.as_str() == form.badge,
        }))
        .collect();

        Self {
            admin_user,
            title: title.to_string(),
            action,
            form,
            categories,
            badges,
            errors: errors
                .map(|e| e.iter().map(|fe| fe.message.clone()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Delete confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/delete.html")]
pub struct DeleteConfirmTemplate {
    pub admin_user: AdminUserView,
    pub product: ProductRow,
}

/// Products list page handler.
///
/// GET /admin/products?q=
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<ProductsIndexTemplate> {
    let categories = state.products().categories()?;
    let products = state.products().search(&query.q)?;

    Ok(ProductsIndexTemplate {
        admin_user: AdminUserView::new(&admin, PRODUCTS_PATH),
        products: products
            .iter()
            .map(|p| ProductRow::new(p, &categories))
            .collect(),
        search_query: query.q,
    })
}

/// Blank create form.
///
/// GET /admin/products/new
#[instrument(skip(admin, state))]
pub async fn new_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<ProductFormTemplate> {
    let categories = state.products().categories()?;

    Ok(ProductFormTemplate::new(
        AdminUserView::new(&admin, PRODUCTS_PATH),
        "Tambah Produk Baru",
        PRODUCTS_PATH.to_string(),
        ProductForm::blank(&categories),
        &categories,
        None,
    ))
}

/// Create a product.
///
/// POST /admin/products
#[instrument(skip(admin, state))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    match state.products().create(&form) {
        Ok(_) => Ok(Redirect::to(PRODUCTS_PATH).into_response()),
        Err(CatalogError::Validation(errors)) => {
            let categories = state.products().categories()?;
            let page = ProductFormTemplate::new(
                AdminUserView::new(&admin, PRODUCTS_PATH),
                "Tambah Produk Baru",
                PRODUCTS_PATH.to_string(),
                form,
                &categories,
                Some(&errors),
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Edit form pre-filled from the stored product.
///
/// GET /admin/products/{id}/edit
#[instrument(skip(admin, state))]
pub async fn edit_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductFormTemplate> {
    let id = ProductId::new(id);
    let product = state.products().get(&id)?;
    let categories = state.products().categories()?;

    Ok(ProductFormTemplate::new(
        AdminUserView::new(&admin, PRODUCTS_PATH),
        "Edit Produk",
        format!("{PRODUCTS_PATH}/{id}"),
        ProductForm::from_product(&product),
        &categories,
        None,
    ))
}

/// Save edits to a product.
///
/// POST /admin/products/{id}
#[instrument(skip(admin, state))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let id = ProductId::new(id);

    match state.products().update(&id, &form) {
        Ok(_) => Ok(Redirect::to(PRODUCTS_PATH).into_response()),
        Err(CatalogError::Validation(errors)) => {
            let categories = state.products().categories()?;
            let page = ProductFormTemplate::new(
                AdminUserView::new(&admin, PRODUCTS_PATH),
                "Edit Produk",
                format!("{PRODUCTS_PATH}/{id}"),
                form,
                &categories,
                Some(&errors),
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Flip a product between active and hidden.
///
/// POST /admin/products/{id}/toggle
#[instrument(skip(_admin, state))]
pub async fn toggle(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect> {
    state.products().toggle_active(&ProductId::new(id))?;
    Ok(Redirect::to(&list_url(&form.q)))
}

/// Ask before deleting.
///
/// GET /admin/products/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeleteConfirmTemplate> {
    let product = state.products().get(&ProductId::new(id))?;
    let categories = state.products().categories()?;

    Ok(DeleteConfirmTemplate {
        admin_user: AdminUserView::new(&admin, PRODUCTS_PATH),
        product: ProductRow::new(&product, &categories),
    })
}

/// Delete a product once confirmed.
///
/// POST /admin/products/{id}/delete
#[instrument(skip(_admin, state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect> {
    if form.confirm != "yes" {
        return Err(AppError::BadRequest("deletion not confirmed".to_string()));
    }

    state.products().delete(&ProductId::new(id))?;
    Ok(Redirect::to(PRODUCTS_PATH))
}

fn list_url(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        PRODUCTS_PATH.to_string()
    } else {
        format!("{PRODUCTS_PATH}?q={}", urlencoding::encode(query))
    }
}
