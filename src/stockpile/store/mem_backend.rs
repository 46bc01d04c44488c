use super::backend::StorageBackend;
use crate::error::{Result, StockError};
use crate::model::{Catalogue, Product};
use std::cell::RefCell;

/// In-memory storage backend for testing and demos.
///
/// Uses `RefCell` for interior mutability since stockpile is
/// single-threaded. This avoids the overhead of `RwLock` while still
/// allowing the `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    products: RefCell<Vec<Product>>,
    catalogues: RefCell<Vec<Catalogue>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            products: RefCell::new(Vec::new()),
            catalogues: RefCell::new(Vec::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockError::Store("Simulated write error".to_string()));
        }
        *self.products.borrow_mut() = products.to_vec();
        Ok(())
    }

    fn load_catalogues(&self) -> Result<Vec<Catalogue>> {
        Ok(self.catalogues.borrow().clone())
    }

    fn save_catalogues(&self, catalogues: &[Catalogue]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockError::Store("Simulated write error".to_string()));
        }
        *self.catalogues.borrow_mut() = catalogues.to_vec();
        Ok(())
    }
}
