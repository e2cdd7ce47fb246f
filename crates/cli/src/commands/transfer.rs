//! Export and import the whole catalog as one JSON document.

use std::fs;
use std::io::Write;
use std::path::Path;

use luxe_store::{CatalogSnapshot, CatalogStore};
use tracing::info;

use super::CliError;

/// Write the catalog as pretty-printed JSON.
///
/// Seed data is exported for collections that were never persisted, so the
/// output always describes what the sites currently show.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the output fails.
pub fn export(store: &CatalogStore, out: &mut impl Write) -> Result<(), CliError> {
    let snapshot = store.snapshot()?;
    serde_json::to_writer_pretty(&mut *out, &snapshot)?;
    writeln!(out)?;
    Ok(())
}

/// Export into a file, replacing it if present.
///
/// # Errors
///
/// See [`export`].
pub fn export_to_file(store: &CatalogStore, path: &Path) -> Result<(), CliError> {
    let mut file = fs::File::create(path)?;
    export(store, &mut file)?;
    info!(path = %path.display(), "Exported catalog");
    Ok(())
}

/// Replace the catalog with a parsed snapshot.
///
/// The whole document is validated before anything is written.
///
/// # Errors
///
/// Returns [`CliError::Json`] for a malformed document, or the first store
/// failure.
pub fn import(store: &CatalogStore, json: &str) -> Result<CatalogSnapshot, CliError> {
    let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
    store.restore(&snapshot)?;
    Ok(snapshot)
}

/// Import from a file written by [`export_to_file`].
///
/// # Errors
///
/// See [`import`].
pub fn import_from_file(store: &CatalogStore, path: &Path) -> Result<(), CliError> {
    let json = fs::read_to_string(path)?;
    let snapshot = import(store, &json)?;
    info!(
        path = %path.display(),
        products = snapshot.products.len(),
        categories = snapshot.categories.len(),
        "Imported catalog"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_store::CacheOptions;

    #[test]
    fn test_export_then_import_into_another_store() {
        let source = CatalogStore::in_memory();
        let mut products = source.get_products().expect("products");
        products.truncate(1);
        source.save_products(&products).expect("save");

        let mut json = Vec::new();
        export(&source, &mut json).expect("export");

        let target = CatalogStore::in_memory();
        import(&target, &String::from_utf8(json).expect("utf8")).expect("import");

        assert_eq!(target.snapshot().expect("snapshot"), source.snapshot().expect("snapshot"));
    }

    #[test]
    fn test_malformed_import_writes_nothing() {
        let store = CatalogStore::in_memory();

        let err = import(&store, r#"{"products": "nope"}"#).expect_err("malformed");

        assert!(matches!(err, CliError::Json(_)));
        assert!(store.persisted_keys().expect("keys").is_empty());
    }

    #[test]
    fn test_file_round_trip_through_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("catalog.json");
        let store =
            CatalogStore::open(dir.path().join("data"), CacheOptions::default()).expect("open");

        export_to_file(&store, &file).expect("export");
        let exported = fs::read_to_string(&file).expect("read");
        assert!(exported.contains("\"siteContent\""));

        let fresh =
            CatalogStore::open(dir.path().join("other"), CacheOptions::default()).expect("open");
        import_from_file(&fresh, &file).expect("import");
        assert_eq!(fresh.persisted_keys().expect("keys").len(), 4);
    }
}
