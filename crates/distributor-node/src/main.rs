use anyhow::Context;
use distributor_core::NodeConfig;
use distributor_infra::{shutdown_signal, LogFormat};
use distributor_node::{setup_routes, NodeState};
use std::sync::Arc;

const DEFAULT_LOG_FILTER: &str = "distributor=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = NodeConfig::from_env()?;

    let log_format = if config.base.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    distributor_infra::init_telemetry(DEFAULT_LOG_FILTER, log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    let addr = format!("0.0.0.0:{}", config.base.server_port);
    let state = Arc::new(NodeState::new(addr.clone()));
    let app = setup_routes(state, config.max_chunk_size_bytes);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        max_chunk_mb = config.max_chunk_size_bytes / 1024 / 1024,
        "Storage node ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
