//! # Storage Layer
//!
//! This module defines the storage abstraction for stockpile. The
//! [`InventoryStore`] trait allows the application to work with different
//! storage backends.
//!
//! Abstracting storage behind a trait keeps business logic decoupled from
//! persistence, lets tests run against `InMemoryStore` without a
//! filesystem, and leaves room for other backends (a database, a remote
//! service) without touching core logic. The backend is injected at
//! construction time.
//!
//! ## Implementations
//!
//! Both are the same [`stock_store::StockStore`] over a different
//! [`backend::StorageBackend`]:
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Products stored as an ordered array in `products.json`
//!   - Catalogues in `catalogues.json`
//!   - Writes are atomic (tmp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing and demos
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Contract
//!
//! Name matching is case-insensitive for products and catalogues alike, and
//! every by-name operation acts on the first match. `add` appends without a
//! uniqueness check. Listing preserves insertion order in both backends.

use crate::error::Result;
use crate::model::{Catalogue, Product};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod stock_store;

/// Abstract interface for inventory storage.
///
/// Implementations must provide identical CRUD + filter semantics over
/// products, and maintain the bidirectional product/catalogue index.
pub trait InventoryStore {
    /// Append a product. Duplicate names are permitted.
    fn add(&mut self, product: Product) -> Result<()>;

    /// Snapshot of all products, insertion order.
    fn list_all(&self) -> Result<Vec<Product>>;

    /// First product whose name matches, case-insensitively.
    fn find_by_name(&self, name: &str) -> Result<Product>;

    /// Replace the first record matching `product.name` with `product`.
    fn update(&mut self, product: Product) -> Result<()>;

    /// Remove the first record matching `name`, detaching it from its
    /// catalogue.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// All products with `price >= threshold`, original order preserved.
    fn filter_by_min_price(&self, threshold: f64) -> Result<Vec<Product>>;

    /// Append a catalogue.
    fn add_catalogue(&mut self, catalogue: Catalogue) -> Result<()>;

    /// Snapshot of all catalogues, insertion order.
    fn list_catalogues(&self) -> Result<Vec<Catalogue>>;

    /// First catalogue whose name matches, case-insensitively.
    fn find_catalogue(&self, name: &str) -> Result<Catalogue>;

    /// Remove a catalogue. Its products are kept and detached.
    fn delete_catalogue(&mut self, name: &str) -> Result<()>;

    /// File a product under a catalogue, maintaining both sides of the
    /// relation. Reassigning moves the product out of its previous catalogue.
    fn assign_to_catalogue(&mut self, product_name: &str, catalogue_name: &str) -> Result<()>;
}
