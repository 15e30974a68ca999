//! HTTP boundary.
//!
//! Exposes a single route, `POST /users/statistics`, on an axum router.
//! Handlers hold no shared state; every request is computed on its own.

pub mod handlers;
pub mod negotiate;

use crate::utils::config::{ServerConfig, STATISTICS_ROUTE};
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use log::info;
use std::future::Future;
use tokio::net::TcpListener;

pub use handlers::users_statistics;
pub use negotiate::negotiate;

/// Build the application router
///
/// **Public** - used by `serve` and by router tests
pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route(STATISTICS_ROUTE, post(users_statistics))
        .layer(DefaultBodyLimit::max(config.body_limit))
}

/// Serve the router on an already bound listener until `shutdown` resolves
///
/// **Public** - lets callers pick the listener (e.g. port 0 in tests)
pub async fn run<F>(listener: TcpListener, config: &ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown)
        .await
}
