//! Database layer - connection pool, schema hook and sessions
//!
//! - One `PgPool` per process, created explicitly and handed to the HTTP layer
//! - One transaction (`Session`) per request; commit on success, rollback on drop
//! - Row mapping is written out by hand in the repositories

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use pool::{connect_options, create_pool, describe_target, PoolSettings};
pub use repos::ItemRepo;
pub use schema::ensure_schema;
pub use session::Session;
