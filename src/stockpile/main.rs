use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use stockpile::api::{CmdMessage, ConfigAction, MessageLevel, StockApi, StockStats};
use stockpile::config::StockConfig;
use stockpile::error::Result;
use stockpile::model::{Catalogue, Product};
use stockpile::restock::{RestockSettings, RestockWorker};
use stockpile::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{CatalogueCommands, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockApi<FileStore>,
    config: StockConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            price,
            catalogue,
        }) => handle_add(&mut ctx, name, price, catalogue),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Find { name }) => handle_find(&ctx, name),
        Some(Commands::Update { name, price }) => handle_update(&mut ctx, name, price),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name),
        Some(Commands::Filter { min_price }) => handle_filter(&ctx, min_price),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Catalogue(cmd)) => handle_catalogue(&mut ctx, cmd),
        Some(Commands::Restock { count, interval_ms }) => {
            handle_restock(&mut ctx, count, interval_ms)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let config = StockConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = StockApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(home) = std::env::var("STOCKPILE_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs =
        ProjectDirs::from("com", "stockpile", "stockpile").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    price: f64,
    catalogue: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_product(name, price, catalogue.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_products(&result.listed_products, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.find_product(&name)?;
    for product in &result.listed_products {
        print_full_product(ctx, product);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, name: String, price: f64) -> Result<()> {
    let result = ctx.api.update_price(&name, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.remove_product(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &AppContext, min_price: f64) -> Result<()> {
    let result = ctx.api.filter_by_min_price(min_price)?;
    print_products(&result.listed_products, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_catalogue(ctx: &mut AppContext, cmd: CatalogueCommands) -> Result<()> {
    let result = match cmd {
        CatalogueCommands::Create { name } => ctx.api.create_catalogue(name)?,
        CatalogueCommands::List => {
            let result = ctx.api.list_catalogues()?;
            print_catalogues(&result.listed_catalogues);
            result
        }
        CatalogueCommands::Delete { name } => ctx.api.delete_catalogue(&name)?,
        CatalogueCommands::Assign { product, catalogue } => {
            ctx.api.assign_to_catalogue(&product, &catalogue)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_restock(ctx: &mut AppContext, count: Option<u32>, interval_ms: Option<u64>) -> Result<()> {
    let mut settings: RestockSettings = ctx.config.restock();
    if let Some(count) = count {
        settings.batch = count;
    }
    if let Some(ms) = interval_ms {
        settings.interval = std::time::Duration::from_millis(ms);
    }

    println!("{}", "Restocking in progress...".dimmed());
    let (worker, deliveries) = RestockWorker::spawn(settings);
    for product in deliveries {
        let result = ctx.api.add_product(product.name, product.price, None)?;
        print_messages(&result.messages);
    }
    worker.join();
    println!("{}", "Restock finished.".dimmed());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in StockConfig::keys() {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const CATALOGUE_MARKER: &str = "▸";

fn print_products(products: &[Product], currency: &str) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for (i, product) in products.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let marker = if product.catalogue.is_some() {
            format!("{} ", CATALOGUE_MARKER)
        } else {
            "  ".to_string()
        };
        let price_str = format!("{:.2}{}", product.price, currency);
        let time_ago = format_time_ago(product.created_at);

        let fixed_width = idx_str.width() + marker.width() + price_str.width() + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(&product.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "{}{}{}{}{}  {}",
            idx_str,
            marker.yellow(),
            name_display,
            " ".repeat(padding),
            price_str,
            time_ago.dimmed()
        );
    }
}

fn print_full_product(ctx: &AppContext, product: &Product) {
    println!("{}", product.name.bold());
    println!("--------------------------------");
    println!("  price      {:.2}{}", product.price, ctx.config.currency);
    if let Some(name) = catalogue_name(ctx, product) {
        println!("  catalogue  {}", name);
    }
    println!("  added      {}", format_time_ago(product.created_at).trim());
    println!("  updated    {}", format_time_ago(product.updated_at).trim());
}

fn catalogue_name(ctx: &AppContext, product: &Product) -> Option<String> {
    let id = product.catalogue?;
    let catalogues = ctx.api.list_catalogues().ok()?.listed_catalogues;
    catalogues.into_iter().find(|c| c.id == id).map(|c| c.name)
}

fn print_catalogues(catalogues: &[Catalogue]) {
    if catalogues.is_empty() {
        println!("No catalogues found.");
        return;
    }
    for (i, catalogue) in catalogues.iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            i + 1,
            catalogue.name,
            format!("({} products)", catalogue.products.len()).dimmed()
        );
    }
}

fn print_stats(stats: &StockStats, currency: &str) {
    println!("{}  {}", "Products".bold(), stats.count);
    println!("{}  {:.2}{}", "Stock value".bold(), stats.total_value, currency);
    println!(
        "{}  {:.2}{}",
        "Average price".bold(),
        stats.average_price,
        currency
    );
    println!("{}  {}", "Names".bold(), stats.distinct_names.join(" | "));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
