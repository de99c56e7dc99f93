//! Axum server setup
//!
//! Server skeleton with:
//! - CORS (all origins unless an allowlist is configured)
//! - Tracing and timeout middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderValue;
use axum::{BoxError, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, method and header. Development only.
    Permissive,
    /// Only the listed origins; any method and header.
    AllowList(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Build a policy from configured origins.
    ///
    /// No origins, or a lone `*`, means permissive. `*` mixed with concrete
    /// origins is rejected.
    pub fn from_origins<S: AsRef<str>>(origins: &[S]) -> Result<Self, ServerError> {
        let wildcard = origins.iter().any(|origin| origin.as_ref().trim() == "*");
        match (origins.len(), wildcard) {
            (0, _) | (1, true) => return Ok(Self::Permissive),
            (_, true) => return Err(ServerError::InvalidOrigin("*".to_owned())),
            _ => {}
        }

        let parsed = origins
            .iter()
            .map(|origin| {
                let origin = origin.as_ref().trim();
                HeaderValue::from_str(origin)
                    .map_err(|_| ServerError::InvalidOrigin(origin.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::AllowList(parsed))
    }

    fn layer(&self) -> CorsLayer {
        match self {
            Self::Permissive => CorsLayer::permissive(),
            Self::AllowList(origins) => CorsLayer::new()
                .allow_origin(origins.clone())
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// CORS policy (default: permissive)
    pub cors: CorsPolicy,

    /// Upper bound on a whole request (default: 60s)
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors: CorsPolicy::Permissive,
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Shared application state
///
/// Only the pool; there is no other state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router with all routes and middleware.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Router {
    let state = AppState { pool };

    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::items::router())
        .fallback(|| async { ApiError::RouteNotFound })
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .layer(config.cors.layer());

    with_request_timeout(router, config.request_timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Abandon requests running longer than `timeout`, answering with a JSON 408.
pub fn with_request_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::RequestTimeout
    } else {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// The pool stays owned by the caller, who closes it once this returns.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(options, &settings).await?;
/// run_server(pool.clone(), ServerConfig::default()).await?;
/// pool.close().await;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    if config.cors == CorsPolicy::Permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }

    let app = build_router(pool, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
