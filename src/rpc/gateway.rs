//! RPC gateway trait: the boundary to the cluster client collaborator.
//!
//! Everything the orchestrator needs from the chain goes through this trait
//! so tests can substitute a programmable double for the real cluster.

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::rpc::types::{FreshnessToken, RpcResult};

/// Chain operations required by the session orchestrator.
#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Current balance of an account, in lamports.
    async fn balance(&self, account: &Pubkey) -> RpcResult<u64>;

    /// Request a faucet credit of `lamports` to `account`.
    ///
    /// Returns the airdrop transaction signature; the credit is not yet
    /// confirmed when this returns.
    async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> RpcResult<Signature>;

    /// Fetch the latest blockhash and its expiry height.
    async fn latest_blockhash(&self) -> RpcResult<FreshnessToken>;

    /// Wait until `signature` is confirmed, bounded by the freshness token.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        token: &FreshnessToken,
    ) -> RpcResult<()>;

    /// Submit a signed transaction and wait for confirmation.
    async fn send_and_confirm(&self, transaction: &Transaction) -> RpcResult<Signature>;
}
