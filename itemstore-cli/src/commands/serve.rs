//! HTTP server command
//!
//! Owns the pool for the lifetime of the server: open, ensure schema, serve
//! until a shutdown signal, close.

use anyhow::{Context, Result};
use clap::Parser;

use itemstore_server::db::ensure_schema;
use itemstore_server::http::run_server;

use crate::config::{DatabaseArgs, HttpArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub http: HttpArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Resolve everything before touching the network
    let config = args.http.server_config()?;
    let pool = args.db.connect().await?;

    ensure_schema(&pool)
        .await
        .context("Failed to create items table")?;

    tracing::info!("Starting itemstore server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    let served = run_server(pool.clone(), config).await.context("Server error");

    pool.close().await;
    tracing::info!("Database pool closed");

    served
}
