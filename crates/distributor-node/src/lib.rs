//! Distributor Storage Node
//!
//! A standalone chunk store speaking the node protocol the gateway's HTTP
//! backend client uses. Chunks are held in memory for the lifetime of the
//! process.

pub mod error;
mod handlers;
pub mod routes;

pub use error::NodeError;
pub use routes::{setup_routes, NodeState};
