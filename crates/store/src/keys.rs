//! Storage keys.

use core::fmt;

/// Every key the store reads or writes.
///
/// The string names are shared with data written by earlier versions of the
/// site and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Products,
    Categories,
    SiteContent,
    Footer,
    Auth,
}

impl StorageKey {
    /// All keys, in the order they are reset and exported.
    pub const ALL: [Self; 5] = [
        Self::Products,
        Self::Categories,
        Self::SiteContent,
        Self::Footer,
        Self::Auth,
    ];

    /// The persisted key name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "luxe_products",
            Self::Categories => "luxe_categories",
            Self::SiteContent => "luxe_site",
            Self::Footer => "luxe_footer",
            Self::Auth => "luxe_auth_token",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
