// Black-box coverage of the assemble/aggregate contract through the crate's
// public surface, using file-backed sources end to end.

use storefront_cart::adapters::{CsvCatalogSource, JsonCartSource};
use storefront_cart::core::aggregate::{total_count, total_value};
use storefront_cart::core::assembler::assemble;
use storefront_cart::domain::model::{AssemblyWarning, CartEntry, Product};
use storefront_cart::domain::ports::{CartSource, CatalogSource};
use std::io::Write;

fn product(id: &str, name: &str, cost: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: "misc".to_string(),
        cost,
        rating: 3,
        image_url: format!("https://cdn.example.com/{id}.png"),
    }
}

fn entry(id: &str, quantity: i64) -> CartEntry {
    CartEntry {
        product_id: id.to_string(),
        quantity,
    }
}

#[test]
fn test_assemble_then_aggregate() {
    let catalog = vec![product("A", "Alpha", 5.0), product("B", "Beta", 2.0)];
    let entries = vec![entry("A", 3), entry("B", 1)];

    let assembly = assemble(&entries, &catalog);

    assert_eq!(assembly.items.len(), 2);
    assert_eq!(total_value(&assembly.items), 17.0);
    assert_eq!(total_count(&assembly.items), 4);
}

#[test]
fn test_missing_products_surface_as_warnings_not_errors() {
    let catalog = vec![product("A", "Alpha", 5.0)];
    let entries = vec![entry("Z", 1), entry("A", 2), entry("Q", 4)];

    let assembly = assemble(&entries, &catalog);

    assert_eq!(assembly.items.len(), 1);
    assert_eq!(assembly.items[0].product_id, "A");
    assert_eq!(
        assembly.warnings,
        vec![
            AssemblyWarning::MissingProduct {
                product_id: "Z".to_string()
            },
            AssemblyWarning::MissingProduct {
                product_id: "Q".to_string()
            },
        ]
    );
}

#[test]
fn test_repeated_assembly_is_structurally_identical() {
    let catalog = vec![product("A", "Alpha", 5.0), product("B", "Beta", 2.0)];
    let entries = vec![entry("B", 2), entry("A", 1)];

    assert_eq!(assemble(&entries, &catalog), assemble(&entries, &catalog));
}

#[tokio::test]
async fn test_file_backed_sources_feed_the_assembler() {
    let mut catalog_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(catalog_file, "id,name,category,cost,rating,imageUrl").unwrap();
    writeln!(
        catalog_file,
        "A,Alpha,misc,5.0,3,https://cdn.example.com/A.png"
    )
    .unwrap();
    writeln!(
        catalog_file,
        "B,Beta,misc,2.0,4,https://cdn.example.com/B.png"
    )
    .unwrap();
    catalog_file.flush().unwrap();

    let mut cart_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        cart_file,
        r#"[{{"productId":"A","quantity":3}},{{"productId":"B","quantity":1}}]"#
    )
    .unwrap();
    cart_file.flush().unwrap();

    let catalog = CsvCatalogSource::new(catalog_file.path())
        .fetch_catalog()
        .await
        .unwrap();
    let entries = JsonCartSource::new(cart_file.path())
        .fetch_entries()
        .await
        .unwrap();

    let assembly = assemble(&entries, &catalog);

    assert_eq!(total_value(&assembly.items), 17.0);
    assert_eq!(total_count(&assembly.items), 4);
}
