//! Provider boundary types and error definitions.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Typed response of a successful wallet connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectResponse {
    /// Public key of the wallet's active account.
    pub public_key: Pubkey,
}

/// Errors that can occur at the wallet provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The user (or provider) declined the connection prompt.
    #[error("connection rejected: {0}")]
    Rejected(String),

    /// Provider could not be reached or loaded.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Provider failed to sign a transaction.
    #[error("signing failed: {0}")]
    Signing(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
