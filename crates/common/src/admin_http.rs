//! Lightweight admin HTTP listener
//!
//! Exposes `/healthz` and `/metrics` on a separate port so scrapers and
//! probes stay off the public listener.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::metrics::encode_metrics;

async fn healthz() -> &'static str { "OK" }

pub fn admin_router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(|| async { encode_metrics() }))
}

/// Bind the admin listener and serve it on a background task.
pub async fn spawn_admin_server(addr: SocketAddr) -> anyhow::Result<JoinHandle<()>> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "admin server listening");
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, admin_router()).await {
            error!(error = %e, "admin server stopped");
        }
    }))
}
