use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S, name: &str) -> Result<CmdResult> {
    let product = store.find_by_name(name)?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
