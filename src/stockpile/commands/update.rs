use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;
use chrono::Utc;

/// Change a product's price. Reads the stored record first so the catalogue
/// link and creation time survive the replace.
pub fn run<S: InventoryStore>(store: &mut S, name: &str, price: f64) -> Result<CmdResult> {
    let mut product = store.find_by_name(name)?;
    product.price = price;
    product.updated_at = Utc::now();
    store.update(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated: {}",
        product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}
