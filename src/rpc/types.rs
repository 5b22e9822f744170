//! Cluster-specific types and error definitions.

use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use thiserror::Error;

/// Freshness token anchoring a confirmation wait to a known blockhash.
///
/// Obtained immediately before confirming; a transaction that has not landed
/// by `last_valid_block_height` will never land and the wait can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessToken {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Errors that can occur during RPC gateway operations.
#[derive(Debug, Error)]
pub enum RpcError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The faucet declined or failed the airdrop request.
    #[error("faucet unavailable: {0}")]
    FaucetUnavailable(String),

    /// The transaction did not confirm before its blockhash expired.
    #[error("transaction {signature} not confirmed by block height {last_valid_block_height}")]
    ConfirmationTimeout {
        signature: Signature,
        last_valid_block_height: u64,
    },

    /// The cluster rejected the submitted transaction.
    #[error("transaction rejected: {0}")]
    Rejected(String),
}

/// Result type for RPC gateway operations.
pub type RpcResult<T> = Result<T, RpcError>;
