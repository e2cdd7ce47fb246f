//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use luxe_store::StoreError;

use crate::services::{AdminAuthError, CatalogError};

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog storage failed or holds malformed data.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Self::NotFound(format!("product {id}")),
            CatalogError::Validation(errors) => Self::BadRequest(errors.to_string()),
            CatalogError::Store(e) => Self::Store(e),
        }
    }
}

impl From<AdminAuthError> for AppError {
    fn from(err: AdminAuthError) -> Self {
        match err {
            AdminAuthError::InvalidCredentials => Self::BadRequest(err.to_string()),
            AdminAuthError::Store(e) => Self::Store(e),
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Internal(format!("session: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for admin handlers.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context for the logged-in admin.
pub fn set_sentry_user(email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}
