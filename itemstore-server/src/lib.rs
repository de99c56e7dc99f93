//! itemstore-server: read-only items API over PostgreSQL
//!
//! Persistence lives in [`db`] (pool, schema hook, request-scoped sessions,
//! item repository). The axum surface lives in [`http`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ensure_schema, DbError, PoolSettings, Session};
pub use http::{run_server, ApiError, CorsPolicy, ServerConfig};
pub use models::{Item, NewItem};
