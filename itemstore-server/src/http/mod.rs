//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default, optional origin allowlist
//! - Request tracing and request timeout
//! - Graceful shutdown
//! - JSON error responses with a `detail` field

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, CorsPolicy, ServerConfig, ServerError};
