//! Distributor Core Library
//!
//! This crate provides the domain models, error types and configuration
//! shared by the gateway, the storage node and the service layer.

pub mod backend_kind;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use backend_kind::BackendKind;
pub use config::{BaseConfig, Config, GatewayConfig, NodeConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{ChunkLocation, DownloadedFile, ResourceId, UploadReceipt};
