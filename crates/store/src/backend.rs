//! Raw key/value backends.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Result, StoreError};

/// Raw string storage addressed by key.
///
/// Implementations must make `write` all-or-nothing from the caller's point
/// of view: a concurrent `read` sees either the old or the new value.
pub trait StorageBackend: Send + Sync {
    /// Read the value under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Backend("memory backend lock poisoned".to_string())
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.read("k").expect("read").is_none());

        backend.write("k", "v1").expect("write");
        backend.write("k", "v2").expect("overwrite");
        assert_eq!(backend.read("k").expect("read").as_deref(), Some("v2"));

        backend.remove("k").expect("remove");
        backend.remove("k").expect("remove missing");
        assert!(backend.read("k").expect("read").is_none());
    }
}
