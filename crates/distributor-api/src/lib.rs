//! Distributor API Library
//!
//! HTTP gateway in front of the chunk distributor: multipart upload, download
//! by resource id, health checks and application setup.

mod handlers;
mod utils;

pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
