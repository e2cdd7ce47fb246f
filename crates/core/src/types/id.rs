//! Newtype ids for type-safe record references.
//!
//! Ids are opaque strings (the persisted format predates this crate and
//! uses values like `"p1"` or `"2"`). Use the `define_id!` macro to create
//! wrappers that prevent mixing ids of different record types.

use rand::Rng;

/// Macro to define a type-safe string id wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use luxe_core::define_id;
/// define_id!(OrderRef);
/// define_id!(ShelfRef);
///
/// let order = OrderRef::new("o-1");
/// let shelf = ShelfRef::new("o-1");
///
/// // These are different types, so this won't compile:
/// // let _: OrderRef = shelf;
/// assert_eq!(order.as_str(), shelf.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);

/// Alphabet for generated product ids (lowercase base 36).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters after the `p` prefix.
const GENERATED_ID_LEN: usize = 9;

impl ProductId {
    /// Generate a fresh product id of the form `p` + 9 base-36 characters.
    ///
    /// Collisions are not checked; the catalog is small enough that the
    /// 36^9 space makes them irrelevant.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut id = String::with_capacity(GENERATED_ID_LEN + 1);
        id.push('p');
        for _ in 0..GENERATED_ID_LEN {
            let idx = rng.random_range(0..ID_ALPHABET.len());
            id.push(char::from(ID_ALPHABET.get(idx).copied().unwrap_or(b'0')));
        }
        Self(id)
    }
}
