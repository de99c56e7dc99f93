//! Item repository
//!
//! Queries against the `items` table with hand-written row mapping.

use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

use crate::db::DbError;
use crate::models::{Item, NewItem};

/// Column list shared by every SELECT/RETURNING, in `item_from_row` order.
const ITEM_COLUMNS: &str = "id, name, description, price, available";

/// Map one `items` row onto an [`Item`].
fn item_from_row(row: &PgRow) -> Result<Item, sqlx::Error> {
    Ok(Item {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        available: row.try_get("available")?,
    })
}

/// Item repository bound to one session's connection
pub struct ItemRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ItemRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All items in storage order. No filtering, no pagination.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let rows = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items"))
            .fetch_all(&mut *self.conn)
            .await?;

        let items = rows
            .iter()
            .map(item_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// A single item by primary key, or `DbError::NotFound`.
    pub async fn get(&mut self, id: i32) -> Result<Item, DbError> {
        let row = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "Item",
                id: id.to_string(),
            })?;

        Ok(item_from_row(&row)?)
    }

    /// Insert a new item and return it with its assigned id.
    pub async fn insert(&mut self, item: &NewItem) -> Result<Item, DbError> {
        let row = sqlx::query(&format!(
            "INSERT INTO items (name, description, price, available) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(item.available)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(item_from_row(&row)?)
    }
}
