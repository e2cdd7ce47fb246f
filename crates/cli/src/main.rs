//! Luxe & Beauty CLI - Catalog seeding and maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the built-in catalog into an empty data directory
//! luxe-cli seed
//!
//! # Overwrite whatever is there with the built-in catalog
//! luxe-cli seed --force
//!
//! # Back up and restore the catalog
//! luxe-cli export --output catalog.json
//! luxe-cli import catalog.json
//!
//! # Search products by name
//! luxe-cli products list --query serum
//!
//! # Sign every admin session out
//! luxe-cli auth clear
//! ```
//!
//! Every command takes `--data-dir` (env `LUXE_DATA_DIR`, default `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luxe_store::{CacheOptions, CatalogStore};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "luxe-cli")]
#[command(author, version, about = "Luxe & Beauty catalog tools")]
struct Cli {
    /// Directory holding the persisted catalog
    #[arg(long, global = true, env = "LUXE_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in catalog
    Seed {
        /// Overwrite data that is already persisted
        #[arg(short, long)]
        force: bool,
    },
    /// Remove every persisted key so the sites fall back to the built-in catalog
    Reset,
    /// Write the catalog as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the catalog with a previously exported JSON file
    Import {
        /// File produced by `export`
        file: PathBuf,
    },
    /// Inspect products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the admin login token
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered by name
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Delete the persisted token, signing every admin session out
    Clear,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxe_cli=info,luxe_store=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = CatalogStore::open(&cli.data_dir, CacheOptions::default())?;
    tracing::debug!(data_dir = %cli.data_dir.display(), "Catalog store opened");

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Seed { force } => commands::seed::seed(&store, force)?,
        Commands::Reset => commands::seed::reset(&store)?,
        Commands::Export { output } => match output {
            Some(path) => commands::transfer::export_to_file(&store, &path)?,
            None => commands::transfer::export(&store, &mut stdout)?,
        },
        Commands::Import { file } => commands::transfer::import_from_file(&store, &file)?,
        Commands::Products { action } => match action {
            ProductsAction::List { query } => {
                commands::products::list(&store, &query, &mut stdout)?;
            }
        },
        Commands::Auth { action } => match action {
            AuthAction::Clear => commands::auth::clear(&store)?,
        },
    }

    Ok(())
}
