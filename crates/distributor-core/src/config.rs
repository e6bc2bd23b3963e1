//! Configuration module
//!
//! This module provides configuration structures for the gateway and the
//! storage node. Values come from environment variables, optionally loaded
//! from a `.env` file.

use std::env;

use crate::backend_kind::BackendKind;

// Common constants
const GATEWAY_PORT: u16 = 8080;
const NODE_PORT: u16 = 8081;
const BACKEND_TIMEOUT_SECS: u64 = 30;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const DEFAULT_BACKEND_ADDRESSES: &str = "http://localhost:8081,http://localhost:8082,http://localhost:8083,http://localhost:8084,http://localhost:8085,http://localhost:8086";

/// Base configuration shared by both services
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
}

impl BaseConfig {
    fn from_env(port_var: &str, default_port: u16) -> Self {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        BaseConfig {
            server_port: env::var(port_var)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_port),
            environment,
        }
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

/// Gateway configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base: BaseConfig,
    pub backend_kind: BackendKind,
    /// One entry per backend slot; the slot index is the chunk order it stores.
    pub backend_addresses: Vec<String>,
    pub backend_timeout_secs: u64,
    pub max_upload_size_bytes: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let backend_kind = match env::var("BACKEND_KIND") {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::default(),
        };

        let backend_addresses = parse_address_list(
            &env::var("BACKEND_ADDRESSES").unwrap_or_else(|_| DEFAULT_BACKEND_ADDRESSES.to_string()),
        );

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        Ok(GatewayConfig {
            base: BaseConfig::from_env("PORT", GATEWAY_PORT),
            backend_kind,
            backend_addresses,
            backend_timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(BACKEND_TIMEOUT_SECS),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.backend_addresses.is_empty() {
            return Err(anyhow::anyhow!(
                "BACKEND_ADDRESSES must list at least one backend"
            ));
        }

        if self.backend_timeout_secs == 0 {
            return Err(anyhow::anyhow!("BACKEND_TIMEOUT_SECS cannot be 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
        }

        if self.backend_kind == BackendKind::Http {
            if let Some(bad) = self
                .backend_addresses
                .iter()
                .find(|a| !a.starts_with("http://") && !a.starts_with("https://"))
            {
                return Err(anyhow::anyhow!(
                    "Backend address '{}' must start with http:// or https://",
                    bad
                ));
            }
        }

        Ok(())
    }
}

/// Application configuration (gateway).
#[derive(Clone, Debug)]
pub struct Config(pub Box<GatewayConfig>);

impl Config {
    fn as_gateway(&self) -> &GatewayConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = GatewayConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_gateway().validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.as_gateway().base.is_production()
    }

    pub fn server_port(&self) -> u16 {
        self.as_gateway().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_gateway().base.environment
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.as_gateway().backend_kind
    }

    pub fn backend_addresses(&self) -> &[String] {
        &self.as_gateway().backend_addresses
    }

    pub fn backend_timeout_secs(&self) -> u64 {
        self.as_gateway().backend_timeout_secs
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_gateway().max_upload_size_bytes
    }
}

/// Storage node configuration
#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub base: BaseConfig,
    pub max_chunk_size_bytes: usize,
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let max_chunk_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        Ok(NodeConfig {
            base: BaseConfig::from_env("NODE_PORT", NODE_PORT),
            max_chunk_size_bytes: max_chunk_size_mb * 1024 * 1024,
        })
    }
}

/// Split a comma separated address list, dropping blanks and trailing slashes.
pub fn parse_address_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(addresses: &[&str], kind: BackendKind) -> GatewayConfig {
        GatewayConfig {
            base: BaseConfig {
                server_port: 8080,
                environment: "development".to_string(),
            },
            backend_kind: kind,
            backend_addresses: addresses.iter().map(|s| s.to_string()).collect(),
            backend_timeout_secs: 30,
            max_upload_size_bytes: 1024,
        }
    }

    #[test]
    fn test_parse_address_list() {
        let parsed = parse_address_list(" http://a:1/ ,, http://b:2 ,");
        assert_eq!(parsed, vec!["http://a:1", "http://b:2"]);
    }

    #[test]
    fn test_default_addresses_have_six_backends() {
        assert_eq!(parse_address_list(DEFAULT_BACKEND_ADDRESSES).len(), 6);
    }

    #[test]
    fn test_validate_rejects_empty_backend_list() {
        assert!(gateway(&[], BackendKind::Memory).validate().is_err());
    }

    #[test]
    fn test_validate_http_requires_scheme() {
        assert!(gateway(&["localhost:8081"], BackendKind::Http).validate().is_err());
        assert!(gateway(&["localhost:8081"], BackendKind::Memory).validate().is_ok());
        assert!(gateway(&["http://localhost:8081"], BackendKind::Http).validate().is_ok());
    }

    #[test]
    fn test_production_detection() {
        let mut config = gateway(&["http://a"], BackendKind::Memory);
        assert!(!config.base.is_production());
        config.base.environment = "PROD".to_string();
        assert!(config.base.is_production());
    }
}
