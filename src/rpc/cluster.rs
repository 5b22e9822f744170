//! Cluster RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a named cluster endpoint (devnet by default)
//! - Query balances and blockhashes
//! - Request faucet airdrops
//! - Submit transactions and poll confirmations
//!
//! All calls are wrapped in a configurable timeout so a stalled endpoint
//! surfaces as a typed error instead of hanging a handler forever.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::config::schema::ClusterConfig;
use crate::rpc::gateway::RpcGateway;
use crate::rpc::types::{FreshnessToken, RpcError, RpcResult};

/// How often the confirmation loop re-polls the cluster.
const CONFIRM_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// RPC client wrapper over the nonblocking Solana client.
pub struct ClusterClient {
    inner: RpcClient,
    commitment: CommitmentConfig,
    rpc_timeout_secs: u64,
}

impl ClusterClient {
    /// Create a client against the configured cluster URL and commitment.
    pub fn new(config: &ClusterConfig) -> RpcResult<Self> {
        let url: url::Url = config
            .url
            .parse()
            .map_err(|e| RpcError::Rpc(format!("invalid cluster URL '{}': {}", config.url, e)))?;

        let commitment = config.commitment_config().ok_or_else(|| {
            RpcError::Rpc(format!("unknown commitment level '{}'", config.commitment))
        })?;
        let inner = RpcClient::new_with_commitment(url.to_string(), commitment);

        tracing::info!(
            cluster_url = %config.url,
            commitment = %config.commitment,
            "Cluster client initialized"
        );

        Ok(Self {
            inner,
            commitment,
            rpc_timeout_secs: config.rpc_timeout_secs,
        })
    }

    fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }

    async fn with_timeout<T, F>(&self, fut: F) -> RpcResult<T>
    where
        F: std::future::Future<Output = Result<T, solana_client::client_error::ClientError>>,
    {
        match timeout(self.timeout_duration(), fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(RpcError::Rpc(e.to_string())),
            Err(_) => Err(RpcError::Timeout(self.rpc_timeout_secs)),
        }
    }
}

#[async_trait]
impl RpcGateway for ClusterClient {
    async fn balance(&self, account: &Pubkey) -> RpcResult<u64> {
        self.with_timeout(self.inner.get_balance(account)).await
    }

    async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> RpcResult<Signature> {
        match timeout(
            self.timeout_duration(),
            self.inner.request_airdrop(account, lamports),
        )
        .await
        {
            Ok(Ok(signature)) => Ok(signature),
            Ok(Err(e)) => Err(RpcError::FaucetUnavailable(e.to_string())),
            Err(_) => Err(RpcError::Timeout(self.rpc_timeout_secs)),
        }
    }

    async fn latest_blockhash(&self) -> RpcResult<FreshnessToken> {
        let (blockhash, last_valid_block_height) = self
            .with_timeout(
                self.inner
                    .get_latest_blockhash_with_commitment(self.commitment),
            )
            .await?;

        Ok(FreshnessToken {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        token: &FreshnessToken,
    ) -> RpcResult<()> {
        loop {
            let confirmed = self
                .with_timeout(
                    self.inner
                        .confirm_transaction_with_commitment(signature, self.commitment),
                )
                .await?
                .value;

            if confirmed {
                tracing::debug!(signature = %signature, "Transaction confirmed");
                return Ok(());
            }

            let block_height = self.with_timeout(self.inner.get_block_height()).await?;
            check_expiry(signature, block_height, token)?;

            tracing::debug!(
                signature = %signature,
                block_height = block_height,
                last_valid = token.last_valid_block_height,
                "Waiting for confirmation"
            );
            sleep(CONFIRM_POLL_INTERVAL).await;
        }
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> RpcResult<Signature> {
        // send_and_confirm polls internally; give it several timeout windows
        // rather than a single per-call one.
        let send_timeout = Duration::from_secs(self.rpc_timeout_secs.saturating_mul(4));

        match timeout(
            send_timeout,
            self.inner.send_and_confirm_transaction(transaction),
        )
        .await
        {
            Ok(Ok(signature)) => Ok(signature),
            Ok(Err(e)) => Err(RpcError::Rejected(e.to_string())),
            Err(_) => Err(RpcError::Timeout(self.rpc_timeout_secs.saturating_mul(4))),
        }
    }
}

/// Stop waiting once the chain has moved past the token's expiry height.
///
/// A transaction that has not confirmed by then carried a blockhash the
/// cluster no longer accepts, so it can never land.
fn check_expiry(signature: &Signature, block_height: u64, token: &FreshnessToken) -> RpcResult<()> {
    if block_height > token.last_valid_block_height {
        return Err(RpcError::ConfirmationTimeout {
            signature: *signature,
            last_valid_block_height: token.last_valid_block_height,
        });
    }
    Ok(())
}

impl std::fmt::Debug for ClusterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterClient")
            .field("url", &self.inner.url())
            .field("commitment", &self.commitment)
            .field("timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}
