use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(data_dir)?;
    // Materialize the config so defaults are editable on disk
    let config = StockConfig::load(data_dir)?;
    config.save(data_dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized stock directory at {}",
        data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directory_and_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("stock");

        run(&data_dir).unwrap();

        assert!(data_dir.join("config.json").exists());
    }
}
