//! In-memory catalog store and its two searches.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use storefront_core::ProductId;

use crate::config::CatalogConfig;
use crate::product::Product;
use crate::shop::Shop;

/// In-memory product catalog keyed by product id.
///
/// Iteration order of the underlying map carries no meaning; both searches
/// impose their own deterministic order before truncating.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
    config: CatalogConfig,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            products: HashMap::new(),
            config,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching<'a>(
        &'a self,
        needle: &'a str,
        field: fn(&Product) -> &str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .values()
            .filter(move |p| contains_ignore_case(field(*p), needle))
    }
}

/// Case-insensitive substring containment; `needle` must already be lowercased.
/// An empty needle matches nothing.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(needle)
}

impl Shop for Catalog {
    fn add_new_product(&mut self, product: Product) -> bool {
        if self.products.contains_key(product.id_typed()) {
            tracing::debug!(id = %product.id_typed(), "duplicate product id rejected");
            return false;
        }
        tracing::debug!(id = %product.id_typed(), name = product.name(), "product added");
        self.products.insert(product.id_typed().clone(), product);
        true
    }

    fn delete_product(&mut self, id: &str) -> bool {
        let removed = self.products.remove(id).is_some();
        tracing::debug!(id, removed, "delete product");
        removed
    }

    fn list_products_by_name(&self, search: &str) -> BTreeSet<String> {
        let needle = search.to_lowercase();
        let limit = self.config.result_limit;

        let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
        for product in self.matching(&needle, Product::name) {
            groups.entry(product.name()).or_default().push(product);
        }

        let mut result = BTreeSet::new();
        for (name, group) in groups {
            if let [_] = group.as_slice() {
                result.insert(name.to_string());
            } else {
                result.extend(group.iter().map(|p| p.producer_label()));
            }

            // Checked per group, so one large group can overshoot the limit.
            if result.len() >= limit {
                break;
            }
        }

        if result.len() > limit {
            result = result.into_iter().take(limit).collect();
        }

        tracing::debug!(search, hits = result.len(), "list products by name");
        result
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        let needle = search.to_lowercase();

        let mut matched: Vec<&Product> = self.matching(&needle, Product::producer).collect();
        // Equal producers (ignoring case) fall back to id order.
        matched.sort_by_cached_key(|p| (p.producer().to_lowercase(), p.id_typed().clone()));

        let result: Vec<String> = matched
            .into_iter()
            .take(self.config.result_limit)
            .map(|p| p.name().to_string())
            .collect();

        tracing::debug!(search, hits = result.len(), "list products by producer");
        result
    }
}
