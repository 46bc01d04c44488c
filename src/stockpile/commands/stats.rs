use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

/// Inventory figures computed over the whole stock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockStats {
    pub count: usize,
    pub total_value: f64,
    pub average_price: f64,
    /// Distinct product names, sorted
    pub distinct_names: Vec<String>,
}

pub fn run<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let products = store.list_all()?;
    if products.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No data for statistics."));
        return Ok(result);
    }

    let total: f64 = products.iter().map(|p| p.price).sum();
    let average = total / products.len() as f64;

    let mut names: Vec<String> = products.iter().map(|p| p.name.clone()).collect();
    names.sort();
    names.dedup();

    let stats = StockStats {
        count: products.len(),
        total_value: total,
        average_price: average,
        distinct_names: names,
    };
    Ok(CmdResult::default().with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn computes_totals_and_mean() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ordinateur".into(), 1200.0, None).unwrap();
        add::run(&mut store, "Souris".into(), 25.0, None).unwrap();
        add::run(&mut store, "Clavier".into(), 45.0, None).unwrap();

        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_value, 1270.0);
        assert!((stats.average_price - 1270.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn names_are_distinct_and_sorted() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Souris".into(), 25.0, None).unwrap();
        add::run(&mut store, "Clavier".into(), 45.0, None).unwrap();
        add::run(&mut store, "Souris".into(), 30.0, None).unwrap();

        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.distinct_names, vec!["Clavier", "Souris"]);
    }

    #[test]
    fn empty_stock_yields_no_stats() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
