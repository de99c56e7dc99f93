//! Request-scoped database session
//!
//! A `Session` owns one transaction. `commit()` ends it successfully; any
//! other exit (early return via `?`, panic, cancelled future) drops the
//! transaction, which rolls it back and hands the connection back to the pool.

use sqlx::{PgPool, Postgres, Transaction};

use super::{DbError, ItemRepo};

/// One unit of work bound to a single request or command.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a pooled connection and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        tracing::trace!("session opened");
        Ok(Self { tx })
    }

    /// Item queries running inside this session.
    pub fn items(&mut self) -> ItemRepo<'_> {
        ItemRepo::new(&mut self.tx)
    }

    /// Commit the transaction and release the connection.
    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        tracing::trace!("session committed");
        Ok(())
    }

    /// Discard the transaction and release the connection.
    pub async fn rollback(self) -> Result<(), DbError> {
        self.tx.rollback().await?;
        tracing::trace!("session rolled back");
        Ok(())
    }
}
