//! Business logic services for storefront.
//!
//! # Services
//!
//! - `catalog` - Per-request catalog snapshot with visibility rules

pub mod catalog;
