//! Luxe Store - catalog persistence.
//!
//! A thin key/value layer over a pluggable [`StorageBackend`]. Each of the
//! four record collections lives under its own key as a JSON blob, plus one
//! key for the admin auth token.
//!
//! # Guarantees
//!
//! - Reads never come back empty: a missing key resolves to the built-in
//!   seed from [`luxe_core::seed`].
//! - Saves replace the whole value in one backend write (the file backend
//!   writes a temp file and renames it over the old one).
//! - Malformed persisted data is reported as [`StoreError::Malformed`], never
//!   silently replaced by seed data.
//!
//! # Backends
//!
//! - [`FileBackend`] - one `<key>.json` file per key in a data directory
//! - [`MemoryBackend`] - process-local map, for tests and previews

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod error;
pub mod file;
pub mod keys;
pub mod snapshot;

pub use backend::{MemoryBackend, StorageBackend};
pub use catalog::{CacheOptions, CatalogStore};
pub use error::{Result, StoreError};
pub use file::FileBackend;
pub use keys::StorageKey;
pub use snapshot::CatalogSnapshot;
