//! Luxe Core - Shared domain library.
//!
//! This crate provides the types and pure logic used across all Luxe & Beauty
//! components:
//! - `storefront` - Public landing page with the product catalog
//! - `admin` - Catalog management panel
//! - `cli` - Seeding and maintenance tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no HTTP. Persistence lives in `luxe-store`.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, badges, and the catalog records
//! - [`seed`] - Built-in records used when nothing has been persisted yet
//! - [`catalog`] - Storefront filtering and admin search
//! - [`contact`] - WhatsApp deep links
//! - [`auth`] - Admin session tokens and their expiry policy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod seed;
pub mod types;

pub use auth::{AuthToken, SessionPolicy};
pub use catalog::CategoryFilter;
pub use contact::ContactLink;
pub use types::*;
