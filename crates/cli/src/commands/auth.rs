//! Admin login token maintenance.

use luxe_store::CatalogStore;
use tracing::info;

use super::CliError;

/// Delete the persisted token.
///
/// Every admin session compares against this token, so all of them are
/// signed out on their next request (once the admin's cache expires).
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn clear(store: &CatalogStore) -> Result<(), CliError> {
    let had_token = store.get_auth()?.is_some();
    store.set_auth(None)?;

    info!(had_token, "Cleared admin auth token");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::SessionPolicy;

    #[test]
    fn test_clear_removes_token() {
        let store = CatalogStore::in_memory();
        store
            .set_auth(Some(&SessionPolicy::default().issue()))
            .expect("auth");

        clear(&store).expect("clear");

        assert_eq!(store.get_auth().expect("auth"), None);
    }

    #[test]
    fn test_clear_without_token_is_ok() {
        let store = CatalogStore::in_memory();
        clear(&store).expect("clear");
    }
}
