//! The caller-facing catalog contract.

use std::collections::BTreeSet;

use crate::product::Product;

/// Store of products with insert-if-absent, delete-if-present and two searches.
///
/// Every operation is total: duplicates and misses are reported through the
/// boolean return, and an unmatched search yields an empty collection.
pub trait Shop {
    /// Inserts `product` unless its id is already present.
    ///
    /// Returns `false` (leaving the stored product untouched) on a duplicate id.
    fn add_new_product(&mut self, product: Product) -> bool;

    /// Removes the product with `id`. Returns whether it existed.
    fn delete_product(&mut self, id: &str) -> bool;

    /// Names containing `search` (case-insensitive), at most the result limit.
    ///
    /// A name held by several products is reported once per product as
    /// `"<producer> - <name>"`; a unique name is reported bare.
    fn list_products_by_name(&self, search: &str) -> BTreeSet<String>;

    /// Names of products whose producer contains `search` (case-insensitive),
    /// ordered by producer and capped at the result limit.
    fn list_products_by_producer(&self, search: &str) -> Vec<String>;
}
