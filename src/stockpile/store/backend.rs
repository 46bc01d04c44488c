use crate::error::Result;
use crate::model::{Catalogue, Product};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while StockStore handles the "what" (lookup semantics, the
/// product/catalogue index).
pub trait StorageBackend {
    /// Load the product list. An absent backing file is an empty list,
    /// not an error.
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Save the product list. MUST be atomic for file-backed
    /// implementations (write to tmp then rename) to avoid partial writes.
    fn save_products(&self, products: &[Product]) -> Result<()>;

    /// Load the catalogue list.
    fn load_catalogues(&self) -> Result<Vec<Catalogue>>;

    /// Save the catalogue list.
    fn save_catalogues(&self, catalogues: &[Catalogue]) -> Result<()>;
}
