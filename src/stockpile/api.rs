//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all stockpile operations, regardless of the UI being used.
//!
//! It dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values. Business logic lives in `commands/*.rs`,
//! persistence in `store/`; nothing here touches stdout or the filesystem
//! beyond what the injected store does.
//!
//! ## Generic Over InventoryStore
//!
//! `StockApi<S: InventoryStore>` is generic over the storage backend:
//! - Production: `StockApi<FileStore>`
//! - Testing: `StockApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::InventoryStore;
use std::path::{Path, PathBuf};

/// The main API facade for stockpile operations.
///
/// Generic over `InventoryStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct StockApi<S: InventoryStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: InventoryStore> StockApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_product(
        &mut self,
        name: String,
        price: f64,
        catalogue: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, price, catalogue)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_product(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, name)
    }

    pub fn update_price(&mut self, name: &str, price: f64) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, name, price)
    }

    pub fn remove_product(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn filter_by_min_price(&self, min_price: f64) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, min_price)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn create_catalogue(&mut self, name: String) -> Result<commands::CmdResult> {
        commands::catalogue::create(&mut self.store, name)
    }

    pub fn list_catalogues(&self) -> Result<commands::CmdResult> {
        commands::catalogue::list(&self.store)
    }

    pub fn delete_catalogue(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::catalogue::delete(&mut self.store, name)
    }

    pub fn assign_to_catalogue(
        &mut self,
        product_name: &str,
        catalogue_name: &str,
    ) -> Result<commands::CmdResult> {
        commands::catalogue::assign(&mut self.store, product_name, catalogue_name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::stats::StockStats;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
