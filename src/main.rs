//! Bookshelf CLI - serves the book catalog over HTTP

use std::path::PathBuf;

use bookshelf::config;
use bookshelf::server;
use bookshelf::storage::BookStore;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version = "0.1.0")]
#[command(about = "Book catalog served over a query/mutation HTTP endpoint")]
struct Cli {
    /// Port to listen on (default 8080)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the database file (omit for an in-memory catalog)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    let port = cli.port.or(file_config.port).unwrap_or(8080);
    let database = cli
        .database
        .or_else(|| file_config.database.map(PathBuf::from));

    let store = match &database {
        Some(path) => {
            config::ensure_db_dir(path)?;
            tracing::info!("Opening catalog database at {}", path.display());
            BookStore::open(path)?
        }
        None => {
            tracing::info!("Using an in-memory catalog database");
            BookStore::open_in_memory()?
        }
    };

    server::start_server(port, store).await
}
