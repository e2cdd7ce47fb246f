//! Seed and reset the persisted catalog.

use luxe_store::{CatalogSnapshot, CatalogStore, StorageKey};
use tracing::info;

use super::CliError;

/// Write the built-in catalog.
///
/// Refuses when any collection is already persisted unless `force` is set.
/// The auth token is left untouched.
///
/// # Errors
///
/// Returns [`CliError::AlreadySeeded`] when data exists and `force` is off,
/// or the first store failure.
pub fn seed(store: &CatalogStore, force: bool) -> Result<(), CliError> {
    let existing: Vec<StorageKey> = store
        .persisted_keys()?
        .into_iter()
        .filter(|key| *key != StorageKey::Auth)
        .collect();

    if !existing.is_empty() && !force {
        let keys = existing
            .iter()
            .map(StorageKey::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CliError::AlreadySeeded { keys });
    }

    let snapshot = CatalogSnapshot::seed();
    store.restore(&snapshot)?;

    info!(
        products = snapshot.products.len(),
        categories = snapshot.categories.len(),
        overwritten = existing.len(),
        "Seeded catalog"
    );
    Ok(())
}

/// Remove every persisted key, including the auth token.
///
/// # Errors
///
/// Returns the first store failure.
pub fn reset(store: &CatalogStore) -> Result<(), CliError> {
    store.reset()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::SessionPolicy;

    #[test]
    fn test_seed_writes_every_collection() {
        let store = CatalogStore::in_memory();

        seed(&store, false).expect("seed");

        assert_eq!(
            store.persisted_keys().expect("keys"),
            vec![
                StorageKey::Products,
                StorageKey::Categories,
                StorageKey::SiteContent,
                StorageKey::Footer,
            ]
        );
    }

    #[test]
    fn test_seed_refuses_to_overwrite_without_force() {
        let store = CatalogStore::in_memory();
        store.save_products(&[]).expect("save");

        let err = seed(&store, false).expect_err("existing data");
        assert!(matches!(err, CliError::AlreadySeeded { ref keys } if keys == "luxe_products"));
        assert!(store.get_products().expect("read").is_empty());

        seed(&store, true).expect("forced seed");
        assert_eq!(store.get_products().expect("read").len(), 3);
    }

    #[test]
    fn test_seed_ignores_auth_token() {
        let store = CatalogStore::in_memory();
        let token = SessionPolicy::default().issue();
        store.set_auth(Some(&token)).expect("auth");

        seed(&store, false).expect("seed");
        assert_eq!(store.get_auth().expect("auth"), Some(token));
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = CatalogStore::in_memory();
        seed(&store, false).expect("seed");

        reset(&store).expect("reset");

        assert!(store.persisted_keys().expect("keys").is_empty());
    }
}
