//! Form and session models for admin.

pub mod product_form;
pub mod session;

pub use product_form::{FieldError, FormErrors, ProductForm, ProductInput};
pub use session::{CurrentAdmin, keys as session_keys};
