use super::fs_backend::FsBackend;
use super::stock_store::StockStore;
use std::path::{Path, PathBuf};

pub type FileStore = StockStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        StockStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.data_dir()
    }
}
