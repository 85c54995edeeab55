//! `stockbook` — command-line front end over the inventory manager.
//!
//! Every subcommand is one load → operate → save cycle against a snapshot
//! file; the manager itself stays single-process and synchronous.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

use stockbook_core::ItemKey;
use stockbook_inventory::{Metadata, MetadataValue};

#[derive(Parser)]
#[command(name = "stockbook", version, about = "Validated inventory ledger with durable snapshots")]
struct Cli {
    /// Snapshot file operated on by every subcommand.
    #[arg(long, global = true, default_value = "stockbook.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Receive stock for an item (creates it on first receipt).
    Add {
        key: String,
        quantity: u64,
        /// Metadata fields as KEY=VALUE (numbers are detected automatically).
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },
    /// Remove stock; the item disappears when it reaches zero.
    Remove { key: String, quantity: u64 },
    /// Apply a signed correction to an existing item.
    Adjust { key: String, delta: i64 },
    /// Show one item's quantity and metadata.
    Show { key: String },
    /// List all items with their quantities.
    Report,
}

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Add { key, quantity, meta } => {
            let key = ItemKey::new(key)?;
            let metadata = parse_metadata(&meta)?;
            let mut inventory = stockbook_store::load_or_default(&cli.file)?;
            let total = inventory.add(key.clone(), quantity, metadata)?;
            stockbook_store::save(&inventory, &cli.file)?;
            println!("{key}: {total}");
        }
        Command::Remove { key, quantity } => {
            let key = ItemKey::new(key)?;
            let mut inventory = stockbook_store::load_or_default(&cli.file)?;
            let remaining = inventory.remove(&key, quantity)?;
            stockbook_store::save(&inventory, &cli.file)?;
            println!("{key}: {remaining}");
        }
        Command::Adjust { key, delta } => {
            let key = ItemKey::new(key)?;
            let mut inventory = stockbook_store::load_or_default(&cli.file)?;
            let total = inventory.adjust(&key, delta)?;
            stockbook_store::save(&inventory, &cli.file)?;
            println!("{key}: {total}");
        }
        Command::Show { key } => {
            let key = ItemKey::new(key)?;
            let inventory = stockbook_store::load_or_default(&cli.file)?;
            let record = inventory.get(&key)?;
            println!("{}: {}", record.key, record.quantity);
            for (name, value) in &record.metadata {
                println!("  {name} = {value}");
            }
        }
        Command::Report => {
            let inventory = stockbook_store::load_or_default(&cli.file)?;
            for record in inventory.records() {
                println!("{:<24} {:>10}", record.key.as_str(), record.quantity);
            }
            println!("{} item(s)", inventory.len());
        }
    }

    Ok(())
}

/// Parse `--meta KEY=VALUE` pairs; integer, then float, then text.
fn parse_metadata(pairs: &[String]) -> anyhow::Result<Option<Metadata>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut metadata = Metadata::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("metadata must be KEY=VALUE, got '{pair}'");
        };
        if name.is_empty() {
            bail!("metadata field name cannot be empty in '{pair}'");
        }
        let value = if let Ok(n) = value.parse::<i64>() {
            MetadataValue::Integer(n)
        } else if let Ok(x) = value.parse::<f64>() {
            MetadataValue::Float(x)
        } else {
            MetadataValue::Text(value.to_string())
        };
        metadata.insert(name.to_string(), value);
    }
    Ok(Some(metadata))
}
