//! End-to-end walk through the catalog contract via the `Shop` trait.

use std::collections::BTreeSet;

use storefront_catalog::{Catalog, Product, SharedCatalog, Shop};

fn book(id: &str, name: &str, producer: &str) -> Product {
    Product::new(id, name, producer)
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn run_scenario(shop: &mut impl Shop) {
    // Add
    assert!(shop.add_new_product(book("1", "Book-1", "Author-1")));
    assert!(!shop.add_new_product(book("1", "Book-1", "Author-2")));
    assert!(shop.add_new_product(book("3", "Book-3", "Author-3")));
    assert!(shop.add_new_product(book("4", "Book-4", "Author-4")));

    // Delete
    assert!(shop.delete_product("3"));
    assert!(!shop.delete_product("3"));

    // By name
    assert!(!shop.add_new_product(book("4", "Book-4", "Author-4")));
    assert!(shop.add_new_product(book("5", "Book-4", "Author-5")));
    assert!(shop.add_new_product(book("6", "Book-6", "Author-6")));

    assert_eq!(
        shop.list_products_by_name("Book-4"),
        set(&["Author-4 - Book-4", "Author-5 - Book-4"])
    );
    assert_eq!(shop.list_products_by_name("Book-6"), set(&["Book-6"]));

    // By producer
    for (id, n) in [("7", 7), ("8", 8), ("9", 9)] {
        assert!(shop.add_new_product(book(id, &format!("Book-{n}"), &format!("Author-{n}"))));
    }

    assert_eq!(
        shop.list_products_by_producer("Author"),
        vec!["Book-1", "Book-4", "Book-4", "Book-6", "Book-7", "Book-8", "Book-9"]
    );
}

#[test]
fn catalog_replays_demo_sequence() {
    storefront_observability::init();

    let mut catalog = Catalog::new();
    run_scenario(&mut catalog);
    assert_eq!(catalog.get("1").map(Product::producer), Some("Author-1"));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn shared_catalog_replays_demo_sequence() {
    storefront_observability::init();

    let mut shared = SharedCatalog::default();
    run_scenario(&mut shared);
    assert_eq!(shared.len(), 7);
}
