//! Admin authentication error types.

use thiserror::Error;

use luxe_store::StoreError;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Email or password did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The persisted auth token could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
