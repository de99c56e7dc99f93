//! Operator commands for the items table

use anyhow::{Context, Result};
use clap::Parser;

use itemstore_server::db::{ensure_schema, Session};
use itemstore_server::NewItem;

use crate::config::DatabaseArgs;

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    /// Optional free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Store the item as not available
    #[arg(long)]
    pub unavailable: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl AddArgs {
    fn new_item(&self) -> NewItem {
        let item = NewItem::new(self.name.clone(), self.price).with_available(!self.unavailable);
        match &self.description {
            Some(description) => item.with_description(description.clone()),
            None => item,
        }
    }
}

/// Create the items table if it does not exist
pub async fn run_init_db(args: DatabaseArgs) -> Result<()> {
    let pool = args.connect().await?;
    let result = ensure_schema(&pool)
        .await
        .context("Failed to create items table");
    pool.close().await;
    result
}

/// Insert one item and print it as JSON
pub async fn run_add(args: AddArgs) -> Result<()> {
    let item = args.new_item();
    let pool = args.db.connect().await?;

    let result = async {
        ensure_schema(&pool).await?;
        let mut session = Session::begin(&pool).await?;
        let stored = session.items().insert(&item).await?;
        session.commit().await?;
        Ok::<_, itemstore_server::DbError>(stored)
    }
    .await
    .context("Failed to insert item");
    pool.close().await;

    let stored = result?;
    tracing::info!(id = stored.id, "Item added");
    println!("{}", serde_json::to_string_pretty(&stored)?);
    Ok(())
}

/// Print every item as a JSON array
pub async fn run_list(args: DatabaseArgs) -> Result<()> {
    let pool = args.connect().await?;

    let result = async {
        let mut session = Session::begin(&pool).await?;
        let items = session.items().list().await?;
        session.commit().await?;
        Ok::<_, itemstore_server::DbError>(items)
    }
    .await
    .context("Failed to list items");
    pool.close().await;

    println!("{}", serde_json::to_string_pretty(&result?)?);
    Ok(())
}
