use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(
    store: &mut S,
    name: String,
    price: f64,
    catalogue: Option<&str>,
) -> Result<CmdResult> {
    // Resolve the catalogue first so an unknown name fails before we mutate
    let target = match catalogue {
        Some(cat_name) => Some(store.find_catalogue(cat_name)?),
        None => None,
    };

    let mut product = Product::new(name, price);
    store.add(product.clone())?;

    if let Some(cat) = target {
        store.assign_to_catalogue(&product.name, &cat.name)?;
        product.catalogue = Some(cat.id);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {}",
        product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::model::Catalogue;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_product() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Souris".into(), 25.0, None).unwrap();

        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(store.find_by_name("Souris").unwrap().price, 25.0);
    }

    #[test]
    fn adds_straight_into_catalogue() {
        let mut store = InMemoryStore::new();
        store.add_catalogue(Catalogue::new("Informatique")).unwrap();

        let result = run(&mut store, "Souris".into(), 25.0, Some("informatique")).unwrap();

        let catalogue = store.find_catalogue("Informatique").unwrap();
        assert!(catalogue.products.contains("Souris"));
        assert_eq!(result.affected_products[0].catalogue, Some(catalogue.id));
    }

    #[test]
    fn unknown_catalogue_fails_before_adding() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Souris".into(), 25.0, Some("Fantome"));

        assert!(matches!(result, Err(StockError::CatalogueNotFound(_))));
        assert!(store.list_all().unwrap().is_empty());
    }
}
