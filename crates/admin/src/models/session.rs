//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

use luxe_core::AuthToken;

/// Session-stored admin identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Email the admin logged in with.
    pub email: String,
    /// Token issued at login; must match the persisted token.
    pub token: AuthToken,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
