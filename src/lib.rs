//! Devnet SOL transfer demo library.
//!
//! Orchestrates three collaborators: a wallet provider (Phantom-style
//! capability object behind a trait), a cluster RPC gateway, and a terminal
//! UI. The session owns the ephemeral state — provider handle, generated
//! funding keypair, connected wallet account — and exposes the four
//! user-triggered handlers: create funding account, connect, disconnect,
//! transfer.

pub mod config;
pub mod observability;
pub mod provider;
pub mod rpc;
pub mod session;
pub mod ui;

pub use config::AppConfig;
pub use session::Session;
