use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Catalogue;
use crate::store::InventoryStore;

pub fn create<S: InventoryStore>(store: &mut S, name: String) -> Result<CmdResult> {
    let catalogue = Catalogue::new(name);
    store.add_catalogue(catalogue.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalogue created: {}",
        catalogue.name
    )));
    result.listed_catalogues.push(catalogue);
    Ok(result)
}

pub fn list<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let catalogues = store.list_catalogues()?;
    Ok(CmdResult::default().with_listed_catalogues(catalogues))
}

pub fn delete<S: InventoryStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let catalogue = store.find_catalogue(name)?;
    store.delete_catalogue(&catalogue.name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalogue deleted: {}",
        catalogue.name
    )));
    if !catalogue.products.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} product(s) detached",
            catalogue.products.len()
        )));
    }
    Ok(result)
}

pub fn assign<S: InventoryStore>(
    store: &mut S,
    product_name: &str,
    catalogue_name: &str,
) -> Result<CmdResult> {
    store.assign_to_catalogue(product_name, catalogue_name)?;
    let product = store.find_by_name(product_name)?;
    let catalogue = store.find_catalogue(catalogue_name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Filed {} under {}",
        product.name, catalogue.name
    )));
    result.affected_products.push(product);
    result.listed_catalogues.push(catalogue);
    Ok(result)
}
