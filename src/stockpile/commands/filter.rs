use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S, min_price: f64) -> Result<CmdResult> {
    let products = store.filter_by_min_price(min_price)?;
    Ok(CmdResult::default().with_listed_products(products))
}
