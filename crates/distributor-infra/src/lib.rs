//! Distributor Infrastructure Library
//!
//! Shared plumbing for the gateway and the storage node:
//! - Middleware (request ID)
//! - Tracing subscriber setup
//! - Graceful shutdown signal
//! - JSON error body

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

pub mod error;
pub mod shutdown;

// Re-export commonly used types
#[cfg(feature = "middleware")]
pub use middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, LogFormat};

pub use error::ErrorResponse;
pub use shutdown::shutdown_signal;
