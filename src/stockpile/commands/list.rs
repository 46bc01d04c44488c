use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let products = store.list_all()?;
    Ok(CmdResult::default().with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Keyboard".into(), 45.0, None).unwrap();
        add::run(&mut store, "Mouse".into(), 25.0, None).unwrap();

        let result = run(&store).unwrap();
        let names: Vec<&str> = result
            .listed_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Keyboard", "Mouse"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed_products.is_empty());
    }
}
