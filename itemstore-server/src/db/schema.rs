//! Startup schema hook for the items table
//!
//! Create-if-absent only; there is no migration versioning.

use sqlx::PgPool;

use super::DbError;

/// Ensure the `items` table and its name index exist. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring items schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price DOUBLE PRECISION NOT NULL,
            available BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS items_name_idx ON items (name)")
        .execute(pool)
        .await?;

    tracing::info!("Items schema ready");
    Ok(())
}
