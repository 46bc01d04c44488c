use super::mem_backend::MemBackend;
use super::stock_store::StockStore;

pub type InMemoryStore = StockStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        StockStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Catalogue, Product};
    use crate::store::InventoryStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let product = Product::new(format!("Test Product {}", i + 1), (i + 1) as f64 * 10.0);
                self.store.add(product).unwrap();
            }
            self
        }

        pub fn with_product(mut self, name: &str, price: f64) -> Self {
            self.store.add(Product::new(name, price)).unwrap();
            self
        }

        pub fn with_catalogue(mut self, name: &str) -> Self {
            self.store.add_catalogue(Catalogue::new(name)).unwrap();
            self
        }
    }
}
