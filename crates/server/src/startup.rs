use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    // the browser client is served from a different origin
    CorsLayer::very_permissive()
}

/// Load config.toml (or env fallbacks) and validate it.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: load config, run until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))?;
    let listener = TcpListener::bind(addr).await?;
    serve(cfg, listener, shutdown_signal()).await
}

/// Open the database, migrate, and serve on `listener` until `shutdown` resolves.
///
/// The pool is opened here and closed after the last in-flight request drains.
pub async fn serve<F>(cfg: AppConfig, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_sqlite_dir(&cfg.database.url)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;

    let admin = match cfg.server.admin_port {
        Some(port) => {
            let admin_addr: SocketAddr = format!("{}:{}", cfg.server.host, port)
                .parse()
                .map_err(|e| StartupError::InvalidConfig(format!("admin address: {e}")))?;
            Some(common::admin_http::spawn_admin_server(admin_addr).await?)
        }
        None => None,
    };

    let state = ServerState::from_db(db.clone());
    let app: Router = routes::build_router(state, build_cors());

    let addr = listener.local_addr()?;
    info!(%addr, event = "listening", "student registry listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    if let Some(handle) = admin {
        handle.abort();
    }
    if let Err(e) = db.close().await {
        warn!(error = %e, "database pool close failed");
    }
    info!(event = "stop", "student registry stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => warn!(error = %e, "cannot listen for Ctrl+C; shutting down"),
    }
}
