//! Wallet provider subsystem.
//!
//! # Data Flow
//! ```text
//! WalletConfig (keypair path)
//!     → locator.rs (host environment, detection)
//!     → wallet.rs (provider trait + local implementation)
//!     → types.rs (connect response, typed errors)
//! ```
//!
//! The session orchestrator sees only [`WalletProvider`]; which concrete
//! provider lives behind it is decided by the [`ProviderHost`] the binary
//! (or a test) injects.

pub mod locator;
pub mod types;
pub mod wallet;

pub use locator::{locate, ConfiguredHost, ProviderHost};
pub use types::{ConnectResponse, ProviderError, ProviderResult};
pub use wallet::{LocalWalletProvider, WalletProvider};
