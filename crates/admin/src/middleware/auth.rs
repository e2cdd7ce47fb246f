//! Authentication extractor for admin routes.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Extractor that requires a valid admin login.
///
/// The session must hold a token that is unexpired and equal to the
/// persisted auth token. Otherwise the session is cleared and the request is
/// redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when admin authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to login page.
    RedirectToLogin,
    /// Session layer missing from the router.
    MissingSession,
    /// Persisted token could not be read.
    Unavailable,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::MissingSession | Self::Unavailable => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AdminAuthRejection::MissingSession)?;

        let admin: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or(AdminAuthRejection::RedirectToLogin)?;

        let valid = state.auth().is_valid(&admin.token).map_err(|e| {
            tracing::error!(error = %e, "Failed to read persisted auth token");
            AdminAuthRejection::Unavailable
        })?;

        if !valid {
            tracing::info!(email = %admin.email, "Admin session no longer valid");
            let _ = clear_current_admin(&session).await;
            return Err(AdminAuthRejection::RedirectToLogin);
        }

        Ok(Self(admin))
    }
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    // New id on privilege change
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
