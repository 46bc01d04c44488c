use super::backend::StorageBackend;
use crate::error::{Result, StockError};
use crate::model::{Catalogue, Product};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PRODUCTS_FILENAME: &str = "products.json";
const CATALOGUES_FILENAME: &str = "catalogues.json";

/// Filesystem storage backend.
///
/// Each collection lives in its own JSON file under the data directory,
/// serialized as an ordered array so insertion order and duplicate names
/// survive a round-trip.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(StockError::Io)?;
        }
        Ok(())
    }

    fn load_list<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(StockError::Io)?;
        let list = serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(list)
    }

    fn save_list<T: Serialize>(&self, filename: &str, list: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(list).map_err(StockError::Serialization)?;

        // Atomic write: tmp file then rename
        let tmp_path = self.data_dir.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(StockError::Io)?;
        fs::rename(&tmp_path, self.data_dir.join(filename)).map_err(StockError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_products(&self) -> Result<Vec<Product>> {
        self.load_list(PRODUCTS_FILENAME)
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        self.save_list(PRODUCTS_FILENAME, products)
    }

    fn load_catalogues(&self) -> Result<Vec<Catalogue>> {
        self.load_list(CATALOGUES_FILENAME)
    }

    fn save_catalogues(&self, catalogues: &[Catalogue]) -> Result<()> {
        self.save_list(CATALOGUES_FILENAME, catalogues)
    }
}
