use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let product = store.find_by_name(name)?;
    store.delete(&product.name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product deleted: {}",
        product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, find};
    use crate::error::StockError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_product_is_gone() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Clavier".into(), 45.0, None).unwrap();

        run(&mut store, "clavier").unwrap();

        assert!(matches!(
            find::run(&store, "Clavier"),
            Err(StockError::ProductNotFound(_))
        ));
    }

    #[test]
    fn missing_product_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "Ecran"),
            Err(StockError::ProductNotFound(_))
        ));
    }
}
