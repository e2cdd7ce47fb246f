//! Promotional badge attached to a product.

use serde::{Deserialize, Serialize};

/// Error returned when a badge label is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid badge: {0}")]
pub struct BadgeError(pub String);

/// Small promotional label shown on a product card.
///
/// Serialised with the exact labels used in persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Best Seller")]
    BestSeller,
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Limited")]
    Limited,
}

impl Badge {
    /// All badges, in the order the admin form offers them.
    pub const ALL: [Self; 3] = [Self::BestSeller, Self::New, Self::Limited];

    /// The persisted label (`"Best Seller"`, `"New"`, `"Limited"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestSeller => "Best Seller",
            Self::New => "New",
            Self::Limited => "Limited",
        }
    }

    /// Longer label for the admin form select.
    #[must_use]
    pub const fn form_label(&self) -> &'static str {
        match self {
            Self::BestSeller => "Best Seller",
            Self::New => "New Arrival",
            Self::Limited => "Limited Edition",
        }
    }

    /// Parse an optional badge from a form value; an empty value means none.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is non-empty and not a known label.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, BadgeError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Badge {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Best Seller" => Ok(Self::BestSeller),
            "New" => Ok(Self::New),
            "Limited" => Ok(Self::Limited),
            _ => Err(BadgeError(s.to_owned())),
        }
    }
}
