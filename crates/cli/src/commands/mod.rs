//! Subcommand implementations.
//!
//! Each command works against an already opened [`luxe_store::CatalogStore`]
//! and writes any report to the writer it is given.

pub mod auth;
pub mod products;
pub mod seed;
pub mod transfer;

use thiserror::Error;

use luxe_store::StoreError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// Seeding would overwrite persisted keys.
    #[error("catalog already has data ({keys}); pass --force to overwrite")]
    AlreadySeeded { keys: String },
}
