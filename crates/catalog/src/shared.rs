//! Thread-safe handle over a [`Catalog`].

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::product::Product;
use crate::shop::Shop;

/// Cloneable handle sharing one [`Catalog`] behind a single lock.
///
/// Searches take the read lock; add/delete take the write lock. Clones observe
/// the same catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self::new(Catalog::with_config(config))
    }

    // A panic mid-operation cannot leave the map half-updated, so poisoned
    // guards are recovered instead of surfaced.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("catalog lock poisoned; recovering for read");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("catalog lock poisoned; recovering for write");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn add_new_product(&self, product: Product) -> bool {
        self.write().add_new_product(product)
    }

    pub fn delete_product(&self, id: &str) -> bool {
        self.write().delete_product(id)
    }

    pub fn list_products_by_name(&self, search: &str) -> BTreeSet<String> {
        self.read().list_products_by_name(search)
    }

    pub fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        self.read().list_products_by_producer(search)
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Shop for SharedCatalog {
    fn add_new_product(&mut self, product: Product) -> bool {
        SharedCatalog::add_new_product(self, product)
    }

    fn delete_product(&mut self, id: &str) -> bool {
        SharedCatalog::delete_product(self, id)
    }

    fn list_products_by_name(&self, search: &str) -> BTreeSet<String> {
        SharedCatalog::list_products_by_name(self, search)
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        SharedCatalog::list_products_by_producer(self, search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let shared = SharedCatalog::default();
        let other = shared.clone();

        assert!(shared.add_new_product(Product::new("1", "Book-1", "Author-1")));
        assert!(!other.add_new_product(Product::new("1", "Book-1", "Author-2")));
        assert_eq!(other.get("1").unwrap().producer(), "Author-1");
        assert!(other.delete_product("1"));
        assert!(shared.is_empty());
    }

    #[test]
    fn concurrent_adds_of_one_id_have_a_single_winner() {
        let shared = SharedCatalog::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_new_product(Product::new("same", "Book", format!("Author-{i}")))
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn survives_poisoned_lock() {
        let shared = SharedCatalog::default();
        shared.add_new_product(Product::new("1", "Book-1", "Author-1"));

        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the catalog lock");
        })
        .join();

        assert!(shared.inner.is_poisoned());
        assert_eq!(shared.list_products_by_producer("author"), vec!["Book-1"]);
        assert!(shared.delete_product("1"));
    }

    #[test]
    fn works_through_the_shop_trait() {
        fn exercise(shop: &mut impl Shop) -> Vec<String> {
            shop.add_new_product(Product::new("9", "Book-9", "Author-9"));
            shop.list_products_by_producer("9")
        }

        let mut shared = SharedCatalog::with_config(CatalogConfig::default());
        assert_eq!(exercise(&mut shared), vec!["Book-9"]);
    }
}
