//! Cluster RPC subsystem.
//!
//! # Data Flow
//! ```text
//! ClusterConfig (URL, commitment, timeout)
//!     → cluster.rs (nonblocking RPC client with timeouts)
//!     → gateway.rs (trait boundary the orchestrator sees)
//!     → types.rs (freshness token, typed errors)
//! ```
//!
//! The orchestrator only ever talks to the [`RpcGateway`] trait; the
//! concrete [`ClusterClient`] is wired in by the binary, and tests wire
//! in a programmable double instead.

pub mod cluster;
pub mod gateway;
pub mod types;

pub use cluster::ClusterClient;
pub use gateway::RpcGateway;
pub use types::{FreshnessToken, RpcError, RpcResult};
