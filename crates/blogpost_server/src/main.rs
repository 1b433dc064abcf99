//! Process wiring: config, logging, store, and both listeners.

use anyhow::Context;
use blogpost_core::{init_logging, BlogApi, BlogService, Database};
use blogpost_server::config::ServerConfig;
use blogpost_server::{rest, rpc, AppState};
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let db = Database::open(&config.db_path)
        .with_context(|| format!("failed to open database `{}`", config.db_path.display()))?;
    let state = AppState::new(Arc::new(BlogService::new(db)) as Arc<dyn BlogApi>);

    let rest_listener = TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind REST listener {}", config.http_addr))?;
    let rpc_listener = TcpListener::bind(config.rpc_addr)
        .await
        .with_context(|| format!("failed to bind RPC listener {}", config.rpc_addr))?;

    info!(
        "event=server_start module=server status=ok rest_addr={} rpc_addr={} db_path={}",
        config.http_addr,
        config.rpc_addr,
        config.db_path.display()
    );

    let rest_app = rest::router(state.clone());
    let rpc_app = rpc::router(state);

    let served = tokio::try_join!(
        async {
            axum::serve(rest_listener, rest_app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("REST server failed")
        },
        async {
            axum::serve(rpc_listener, rpc_app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("RPC server failed")
        },
    );

    if let Err(err) = &served {
        error!("event=server_stop module=server status=error error={err:#}");
    } else {
        info!("event=server_stop module=server status=ok");
    }
    served.map(|_| ())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=server status=error error={err}");
        std::future::pending::<()>().await;
    }
}
