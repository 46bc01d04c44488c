use crate::error::{Result, StockError};
use crate::restock::RestockSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "€";

/// Configuration for stockpile, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockConfig {
    /// Currency symbol used when rendering prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Delay between two automatic restock deliveries
    #[serde(default = "default_restock_interval_ms")]
    pub restock_interval_ms: u64,

    /// Number of products a restock run delivers
    #[serde(default = "default_restock_batch")]
    pub restock_batch: u32,

    /// Price range restocked products are drawn from
    #[serde(default = "default_restock_price_min")]
    pub restock_price_min: f64,
    #[serde(default = "default_restock_price_max")]
    pub restock_price_max: f64,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_restock_interval_ms() -> u64 {
    3000
}

fn default_restock_batch() -> u32 {
    3
}

fn default_restock_price_min() -> f64 {
    10.0
}

fn default_restock_price_max() -> f64 {
    100.0
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            restock_interval_ms: default_restock_interval_ms(),
            restock_batch: default_restock_batch(),
            restock_price_min: default_restock_price_min(),
            restock_price_max: default_restock_price_max(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    /// Restock tuning derived from this config
    pub fn restock(&self) -> RestockSettings {
        RestockSettings {
            batch: self.restock_batch,
            interval: Duration::from_millis(self.restock_interval_ms),
            price_min: self.restock_price_min,
            price_max: self.restock_price_max,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            "restock-interval-ms" => Some(self.restock_interval_ms.to_string()),
            "restock-batch" => Some(self.restock_batch.to_string()),
            "restock-price-min" => Some(self.restock_price_min.to_string()),
            "restock-price-max" => Some(self.restock_price_max.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            "restock-interval-ms" => {
                self.restock_interval_ms = value
                    .parse()
                    .map_err(|_| format!("Invalid interval: {}", value))?;
                Ok(())
            }
            "restock-batch" => {
                self.restock_batch = value
                    .parse()
                    .map_err(|_| format!("Invalid batch size: {}", value))?;
                Ok(())
            }
            "restock-price-min" => {
                self.restock_price_min = value
                    .parse()
                    .map_err(|_| format!("Invalid price: {}", value))?;
                Ok(())
            }
            "restock-price-max" => {
                self.restock_price_max = value
                    .parse()
                    .map_err(|_| format!("Invalid price: {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set), in display order.
    pub fn keys() -> &'static [&'static str] {
        &[
            "currency",
            "restock-interval-ms",
            "restock-batch",
            "restock-price-min",
            "restock-price-max",
        ]
    }
}
