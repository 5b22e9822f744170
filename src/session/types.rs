//! Session-level types and error definitions.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

use crate::provider::types::ProviderError;
use crate::rpc::types::RpcError;

/// Outcome of a successful funding-account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingReceipt {
    /// Address of the freshly generated funding account.
    pub address: Pubkey,
    /// Signature of the confirmed faucet airdrop.
    pub airdrop_signature: Signature,
    /// Balance after the airdrop, in lamports.
    pub balance: u64,
}

/// Outcome of a confirmed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Confirmation signature of the transfer transaction.
    pub signature: Signature,
    /// Funding account balance after the transfer, in lamports.
    pub sender_balance: u64,
    /// Connected account balance after the transfer, in lamports.
    pub receiver_balance: u64,
}

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Operation requires a detected wallet provider.
    #[error("no wallet provider detected")]
    NoProvider,

    /// The wallet declined the connect prompt.
    #[error("wallet connect rejected: {0}")]
    ConnectRejected(#[source] ProviderError),

    /// The wallet failed to disconnect.
    #[error("wallet disconnect failed: {0}")]
    DisconnectFailed(#[source] ProviderError),

    /// A chain operation failed; carries the faucet/confirmation/transfer
    /// detail.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
