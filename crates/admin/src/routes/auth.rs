//! Authentication route handlers for admin.
//!
//! Email and password login against the configured account.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{LOGIN_PATH, RequireAdminAuth, clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, session_keys};
use crate::services::AdminAuthError;
use crate::state::AppState;

/// Shown after any rejected login attempt.
pub const LOGIN_FAILED_MESSAGE: &str = "Email atau password salah. Silakan coba lagi.";

/// Submitted login form.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Password is never logged
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<String>,
}

/// Render the login page, or skip it when already signed in.
///
/// GET /admin/login
#[instrument(skip(state, session))]
pub async fn login_page(State(state): State<AppState>, session: Session) -> Result<Response> {
    let current: Option<CurrentAdmin> = session.get(session_keys::CURRENT_ADMIN).await?;

    if let Some(admin) = current {
        if state.auth().is_valid(&admin.token)? {
            return Ok(Redirect::to("/admin").into_response());
        }
    }

    Ok(LoginTemplate {
        email: String::new(),
        error: None,
    }
    .into_response())
}

/// Check credentials and start a session.
///
/// POST /admin/login
#[instrument(skip(state, session))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let email = form.email.trim().to_string();

    match state.auth().login(&email, &form.password).await {
        Ok(token) => {
            set_current_admin(&session, &CurrentAdmin {
                email: email.clone(),
                token,
            })
            .await?;
            set_sentry_user(&email);
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AdminAuthError::InvalidCredentials) => Ok((
            StatusCode::UNAUTHORIZED,
            LoginTemplate {
                email,
                error: Some(LOGIN_FAILED_MESSAGE.to_string()),
            },
        )
            .into_response()),
        Err(e) => Err(AppError::from(e)),
    }
}

/// Logout, clearing both the session and the persisted token.
///
/// Only a signed-in session may log out; anyone else is sent to the login
/// page without touching the persisted token.
///
/// POST /admin/logout
#[instrument(skip(admin, state, session))]
pub async fn logout(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect> {
    state.auth().logout(&admin.token)?;
    clear_current_admin(&session).await?;
    clear_sentry_user();

    Ok(Redirect::to(LOGIN_PATH))
}
