//! Core types for Luxe & Beauty.
//!
//! This module provides type-safe wrappers for the catalog domain and the
//! four persisted record shapes.

pub mod badge;
pub mod id;
pub mod price;
pub mod records;

pub use badge::{Badge, BadgeError};
pub use id::*;
pub use price::{Price, PriceError};
pub use records::{Category, FooterContent, Product, SiteContent, SocialLinks, Testimonial};
