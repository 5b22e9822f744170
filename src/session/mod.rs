//! Session orchestration subsystem.
//!
//! # State machine (informal, per session)
//! ```text
//! NoProvider → ProviderDetected → FundingAccountCreated
//!     → WalletConnected → TransferEnabled
//! ```
//! Disconnect returns to ProviderDetected without resetting the funding
//! account. There is no terminal state; the session ends with the process.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Session;
pub use types::{FundingReceipt, SessionError, SessionResult, TransferReceipt};
