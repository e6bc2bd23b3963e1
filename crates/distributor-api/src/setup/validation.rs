//! Configuration validation
//!
//! Catches misconfigurations at startup instead of on the first upload.

use anyhow::Result;
use distributor_core::{BackendKind, Config};

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() && config.backend_kind() == BackendKind::Memory {
        tracing::warn!(
            "In-memory backends selected in production - uploaded files are lost on restart"
        );
    }

    if config.backend_addresses().len() == 1 {
        tracing::warn!("Only one backend configured - files will not be split");
    }

    Ok(())
}
