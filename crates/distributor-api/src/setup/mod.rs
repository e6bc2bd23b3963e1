//! Application setup and initialization
//!
//! Everything `main` needs to go from a `Config` to a ready router lives here,
//! so tests can build the same router over their own backends.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use distributor_core::Config;
use distributor_infra::LogFormat;
use std::sync::Arc;

const DEFAULT_LOG_FILTER: &str = "distributor=debug,tower_http=debug";

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let log_format = if config.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    distributor_infra::init_telemetry(DEFAULT_LOG_FILTER, log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let distributor = storage::setup_distributor(&config)?;

    let state = Arc::new(AppState::new(distributor, config.clone()));
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
