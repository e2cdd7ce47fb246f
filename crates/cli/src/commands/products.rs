//! Product listing.

use std::io::Write;

use luxe_core::catalog::{category_name, search_by_name};
use luxe_store::CatalogStore;

use super::CliError;

/// Print matching products as an aligned table.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the output fails.
pub fn list(store: &CatalogStore, query: &str, out: &mut impl Write) -> Result<(), CliError> {
    let products = store.get_products()?;
    let categories = store.get_categories()?;
    let matches = search_by_name(&products, query);

    writeln!(
        out,
        "{:<14} {:<36} {:<16} {:>14} {}",
        "ID", "NAME", "CATEGORY", "PRICE", "STATUS"
    )?;

    for product in &matches {
        let category = category_name(&categories, &product.category_id).unwrap_or("-");
        let status = if product.is_active { "active" } else { "hidden" };
        writeln!(
            out,
            "{:<14} {:<36} {:<16} {:>14} {}",
            product.id.as_str(),
            product.name,
            category,
            product.price.to_string(),
            status
        )?;
    }

    writeln!(out, "{} of {} products", matches.len(), products.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(store: &CatalogStore, query: &str) -> String {
        let mut out = Vec::new();
        list(store, query, &mut out).expect("list");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_lists_seed_products() {
        let output = render(&CatalogStore::in_memory(), "");

        assert!(output.contains("Midnight Rose Eau de Parfum"));
        assert!(output.contains("IDR 450,000"));
        assert!(output.ends_with("3 of 3 products\n"));
    }

    #[test]
    fn test_query_filters_by_name() {
        let output = render(&CatalogStore::in_memory(), "LIPSTICK");

        assert!(output.contains("Matte Liquid Lipstick - Rouge"));
        assert!(!output.contains("Glowing Serum"));
        assert!(output.ends_with("1 of 3 products\n"));
    }

    #[test]
    fn test_hidden_products_are_marked() {
        let store = CatalogStore::in_memory();
        let mut products = store.get_products().expect("products");
        for product in &mut products {
            product.is_active = false;
        }
        store.save_products(&products).expect("save");

        let output = render(&store, "");
        assert!(output.contains("hidden"));
        assert!(!output.contains("active\n"));
    }
}
