//! Admin session tokens.
//!
//! A token is an opaque value with an explicit issue and expiry time.
//! The storefront never sees tokens; the admin panel issues one per login
//! and persists it under the auth key so that presence plus expiry gates
//! every admin route.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issued admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub value: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Whether the token is past its expiry at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the token is past its expiry right now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// How long issued tokens stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub ttl: Duration,
}

impl SessionPolicy {
    /// Default token lifetime in hours.
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    /// Create a policy with the given lifetime.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Issue a new random token valid from `now`.
    #[must_use]
    pub fn issue_at(&self, now: DateTime<Utc>) -> AuthToken {
        AuthToken {
            value: Uuid::new_v4().simple().to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        }
    }

    /// Issue a new random token valid from the current time.
    #[must_use]
    pub fn issue(&self) -> AuthToken {
        self.issue_at(Utc::now())
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self::new(Duration::hours(Self::DEFAULT_TTL_HOURS))
    }
}
