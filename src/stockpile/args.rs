use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "stockpile", version = VERSION)]
#[command(about = "Inventory management from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the inventory data (overrides STOCKPILE_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new product
    #[command(alias = "a")]
    Add {
        name: String,
        price: f64,

        /// Catalogue to file the product under
        #[arg(short, long)]
        catalogue: Option<String>,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Look up a product by name
    Find { name: String },

    /// Change a product's price
    Update { name: String, price: f64 },

    /// Remove a product
    #[command(alias = "rm")]
    Delete { name: String },

    /// List products priced at or above a threshold
    Filter { min_price: f64 },

    /// Show inventory statistics
    Stats,

    /// Manage catalogues
    #[command(subcommand, alias = "cat")]
    Catalogue(CatalogueCommands),

    /// Run the automatic restock simulation
    Restock {
        /// Number of deliveries (defaults to the configured batch)
        #[arg(short, long)]
        count: Option<u32>,

        /// Delay between deliveries in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}

#[derive(Subcommand, Debug)]
pub enum CatalogueCommands {
    /// Create a catalogue
    Create { name: String },

    /// List catalogues
    #[command(alias = "ls")]
    List,

    /// Delete a catalogue (its products are kept, detached)
    #[command(alias = "rm")]
    Delete { name: String },

    /// File a product under a catalogue
    Assign { product: String, catalogue: String },
}
