use super::backend::StorageBackend;
use super::InventoryStore;
use crate::error::{Result, StockError};
use crate::model::{Catalogue, Product};

pub struct StockStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> StockStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    fn detach_from_catalogue(&self, catalogues: &mut [Catalogue], product: &Product) -> bool {
        let Some(owner) = product.catalogue else {
            return false;
        };
        let mut changed = false;
        for catalogue in catalogues.iter_mut().filter(|c| c.id == owner) {
            changed |= catalogue.products.remove(&product.name);
        }
        changed
    }
}

impl<B: StorageBackend> InventoryStore for StockStore<B> {
    fn add(&mut self, product: Product) -> Result<()> {
        let mut products = self.backend.load_products()?;
        products.push(product);
        self.backend.save_products(&products)
    }

    fn list_all(&self) -> Result<Vec<Product>> {
        self.backend.load_products()
    }

    fn find_by_name(&self, name: &str) -> Result<Product> {
        let products = self.backend.load_products()?;
        products
            .into_iter()
            .find(|p| p.name_matches(name))
            .ok_or_else(|| StockError::ProductNotFound(name.to_string()))
    }

    fn update(&mut self, product: Product) -> Result<()> {
        let mut products = self.backend.load_products()?;
        let pos = products
            .iter()
            .position(|p| p.name_matches(&product.name))
            .ok_or_else(|| StockError::ProductNotFound(product.name.clone()))?;
        products[pos] = product;
        self.backend.save_products(&products)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let mut products = self.backend.load_products()?;
        let pos = products
            .iter()
            .position(|p| p.name_matches(name))
            .ok_or_else(|| StockError::ProductNotFound(name.to_string()))?;
        let removed = products.remove(pos);
        self.backend.save_products(&products)?;

        // Keep the owning catalogue's index in step
        if removed.catalogue.is_some() {
            let mut catalogues = self.backend.load_catalogues()?;
            if self.detach_from_catalogue(&mut catalogues, &removed) {
                self.backend.save_catalogues(&catalogues)?;
            }
        }
        Ok(())
    }

    fn filter_by_min_price(&self, threshold: f64) -> Result<Vec<Product>> {
        let mut products = self.backend.load_products()?;
        products.retain(|p| p.price >= threshold);
        Ok(products)
    }

    fn add_catalogue(&mut self, catalogue: Catalogue) -> Result<()> {
        let mut catalogues = self.backend.load_catalogues()?;
        catalogues.push(catalogue);
        self.backend.save_catalogues(&catalogues)
    }

    fn list_catalogues(&self) -> Result<Vec<Catalogue>> {
        self.backend.load_catalogues()
    }

    fn find_catalogue(&self, name: &str) -> Result<Catalogue> {
        let catalogues = self.backend.load_catalogues()?;
        catalogues
            .into_iter()
            .find(|c| c.name_matches(name))
            .ok_or_else(|| StockError::CatalogueNotFound(name.to_string()))
    }

    fn delete_catalogue(&mut self, name: &str) -> Result<()> {
        let mut catalogues = self.backend.load_catalogues()?;
        let pos = catalogues
            .iter()
            .position(|c| c.name_matches(name))
            .ok_or_else(|| StockError::CatalogueNotFound(name.to_string()))?;
        let removed = catalogues.remove(pos);
        self.backend.save_catalogues(&catalogues)?;

        // Products survive the catalogue; only the link goes
        let mut products = self.backend.load_products()?;
        let mut changed = false;
        for product in products.iter_mut().filter(|p| p.catalogue == Some(removed.id)) {
            product.catalogue = None;
            changed = true;
        }
        if changed {
            self.backend.save_products(&products)?;
        }
        Ok(())
    }

    fn assign_to_catalogue(&mut self, product_name: &str, catalogue_name: &str) -> Result<()> {
        let mut products = self.backend.load_products()?;
        let mut catalogues = self.backend.load_catalogues()?;

        let ppos = products
            .iter()
            .position(|p| p.name_matches(product_name))
            .ok_or_else(|| StockError::ProductNotFound(product_name.to_string()))?;
        let cpos = catalogues
            .iter()
            .position(|c| c.name_matches(catalogue_name))
            .ok_or_else(|| StockError::CatalogueNotFound(catalogue_name.to_string()))?;

        let target = catalogues[cpos].id;
        if products[ppos].catalogue == Some(target) {
            return Ok(());
        }

        // Moving between catalogues: drop the old membership first
        let detached = products[ppos].clone();
        self.detach_from_catalogue(&mut catalogues, &detached);

        products[ppos].catalogue = Some(target);
        let stored_name = products[ppos].name.clone();
        catalogues[cpos].products.insert(stored_name);

        self.backend.save_products(&products)?;
        self.backend.save_catalogues(&catalogues)
    }
}
