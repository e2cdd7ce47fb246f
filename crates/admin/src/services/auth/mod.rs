//! Admin authentication service.
//!
//! A single shared account guards the panel. Credentials are checked by a
//! [`CredentialVerifier`]; a successful login issues an [`AuthToken`] that is
//! persisted through the catalog store. A request is authenticated when its
//! session carries a token that is unexpired and equal to the persisted one,
//! so logging in elsewhere or clearing the token (CLI `auth clear`) signs
//! every other session out.

mod error;

pub use error::AdminAuthError;

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use luxe_core::{AuthToken, SessionPolicy};
use luxe_store::CatalogStore;

use crate::config::AdminConfig;

/// Checks a submitted email and password.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// One fixed email/password pair, loaded from configuration.
pub struct StaticCredentials {
    email: String,
    password: SecretString,
}

impl StaticCredentials {
    #[must_use]
    pub const fn new(email: String, password: SecretString) -> Self {
        Self { email, password }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password.expose_secret()
    }
}

/// Admin login, logout, and token validation.
#[derive(Clone)]
pub struct AdminAuthService {
    verifier: Arc<dyn CredentialVerifier>,
    policy: SessionPolicy,
    login_delay: Duration,
    store: CatalogStore,
}

impl AdminAuthService {
    /// Create a service around an arbitrary verifier.
    #[must_use]
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        policy: SessionPolicy,
        login_delay: Duration,
        store: CatalogStore,
    ) -> Self {
        Self {
            verifier,
            policy,
            login_delay,
            store,
        }
    }

    /// Create a service using the credentials named in the configuration.
    #[must_use]
    pub fn from_config(config: &AdminConfig, store: CatalogStore) -> Self {
        let credentials = StaticCredentials::new(
            config.login_email.clone(),
            config.login_password.clone(),
        );
        Self::new(
            Arc::new(credentials),
            config.session_policy,
            config.login_delay,
            store,
        )
    }

    /// Check credentials and, on success, issue and persist a fresh token.
    ///
    /// Every attempt waits for the configured login delay first. A failed
    /// attempt leaves any existing token untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on mismatch, or `Store` if the token
    /// cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, AdminAuthError> {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        if !self.verifier.verify(email, password) {
            tracing::warn!(email = %email, "Admin login rejected");
            return Err(AdminAuthError::InvalidCredentials);
        }

        let token = self.policy.issue();
        self.store.set_auth(Some(&token))?;
        tracing::info!(email = %email, expires_at = %token.expires_at, "Admin logged in");

        Ok(token)
    }

    /// Forget the persisted token if it is the one `token` was issued as.
    ///
    /// A stale session logging out leaves a newer login in place. Returns
    /// whether the persisted token was cleared.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the token cannot be read or cleared.
    pub fn logout(&self, token: &AuthToken) -> Result<bool, AdminAuthError> {
        let owns_current = self
            .store
            .get_auth()?
            .is_some_and(|current| current.value == token.value);

        if owns_current {
            self.store.set_auth(None)?;
        }
        Ok(owns_current)
    }

    /// Whether `token` is unexpired and is the currently persisted token.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the persisted token cannot be read.
    pub fn is_valid(&self, token: &AuthToken) -> Result<bool, AdminAuthError> {
        if token.is_expired() {
            return Ok(false);
        }
        let current = self.store.get_auth()?;
        Ok(current.is_some_and(|current| {
            current.value == token.value && !current.is_expired()
        }))
    }
}
