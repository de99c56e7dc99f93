//! itemstore CLI - serve the items API and manage its table
//!
//! - `serve`: run the HTTP API
//! - `init-db`: create the items table
//! - `add`: insert one item
//! - `list`: print all items as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::DatabaseArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "itemstore",
    author,
    version,
    about = "Read-only items API backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),

    /// Create the items table if it does not exist
    InitDb(DatabaseArgs),

    /// Insert an item
    Add(commands::items::AddArgs),

    /// Print all items as JSON
    List(DatabaseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })
        .context("Failed to initialize logging")?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("Ignoring unreadable .env file: {}", err),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
        Commands::Add(args) => commands::run_add(args).await?,
        Commands::List(args) => commands::run_list(args).await?,
    }

    Ok(())
}
