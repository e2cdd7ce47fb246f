//! Session middleware configuration for admin.
//!
//! Sessions live in process memory; restarting the admin signs everyone out.
//! The cookie is `SameSite=Strict` and HTTP-only.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::AdminConfig;

/// Session cookie name for admin.
pub const SESSION_COOKIE_NAME: &str = "luxe_admin_session";

/// Create the session layer.
///
/// Sessions expire after the same period of inactivity as the auth token
/// lifetime.
#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<MemoryStore> {
    let expiry_seconds = config.session_policy.ttl.num_seconds();

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(expiry_seconds),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
