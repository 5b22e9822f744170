//! Configuration schema definitions.
//!
//! All types derive Serde traits and default to a working devnet setup, so
//! the binary runs without any config file at all.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Root configuration for the transfer demo.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Cluster endpoint settings.
    pub cluster: ClusterConfig,

    /// Fixed airdrop and transfer amounts.
    pub amounts: AmountConfig,

    /// Local wallet provider settings.
    pub wallet: WalletConfig,
}

/// Cluster endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// RPC endpoint URL.
    pub url: String,

    /// Commitment level: "processed", "confirmed", or "finalized".
    pub commitment: String,

    /// Per-call RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            url: "https://api.devnet.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            rpc_timeout_secs: 30,
        }
    }
}

impl ClusterConfig {
    /// Parse the configured commitment level, if it names a known one.
    pub fn commitment_config(&self) -> Option<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Some(CommitmentConfig::processed()),
            "confirmed" => Some(CommitmentConfig::confirmed()),
            "finalized" => Some(CommitmentConfig::finalized()),
            _ => None,
        }
    }
}

/// Fixed amounts for the funding and transfer flows, in whole SOL.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AmountConfig {
    /// Faucet credit requested when creating the funding account.
    pub airdrop_sol: u64,

    /// Amount moved to the connected wallet per transfer.
    pub transfer_sol: u64,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            airdrop_sol: 2,
            transfer_sol: 1,
        }
    }
}

impl AmountConfig {
    /// Largest whole-SOL amount that still fits in a u64 of lamports.
    pub const MAX_SOL: u64 = u64::MAX / LAMPORTS_PER_SOL;

    pub fn airdrop_lamports(&self) -> u64 {
        self.airdrop_sol.saturating_mul(LAMPORTS_PER_SOL)
    }

    pub fn transfer_lamports(&self) -> u64 {
        self.transfer_sol.saturating_mul(LAMPORTS_PER_SOL)
    }
}

/// Local wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Path to a Solana CLI keypair file backing the local provider.
    ///
    /// When unset (or unreadable) no provider is injected and the UI shows
    /// the install hint instead.
    pub keypair_path: Option<String>,

    /// Install link shown when no provider is detected.
    pub install_url: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: None,
            install_url: "https://phantom.app/".to_string(),
        }
    }
}
