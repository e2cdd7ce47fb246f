//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Credential check and auth token lifecycle
//! - `catalog` - Product list, search, create, edit, toggle, and delete

pub mod auth;
pub mod catalog;

pub use auth::{AdminAuthError, AdminAuthService, CredentialVerifier, StaticCredentials};
pub use catalog::{CatalogError, Overview, ProductManager};
