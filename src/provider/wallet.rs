//! Wallet provider trait and the local keypair-backed implementation.
//!
//! # Security
//! - Keypairs are loaded from local files chosen by the user
//! - Private key material is never logged or serialized

use async_trait::async_trait;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use solana_sdk::transaction::Transaction;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::provider::types::{ConnectResponse, ProviderError, ProviderResult};

/// Capability object of a wallet extension.
///
/// Models the injected Phantom-style provider: a self-identification flag
/// plus connect, disconnect, and sign-transaction entry points. `connect`
/// may prompt the user out-of-band and can be rejected.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Self-identification flag checked by the locator.
    fn is_phantom(&self) -> bool;

    /// Ask the wallet for its active account, prompting if needed.
    async fn connect(&self) -> ProviderResult<ConnectResponse>;

    /// Drop the wallet's connection to this session.
    async fn disconnect(&self) -> ProviderResult<()>;

    /// Have the wallet sign a transaction with its active account.
    async fn sign_transaction(&self, transaction: Transaction) -> ProviderResult<Transaction>;
}

/// Local wallet provider backed by a keypair file.
///
/// Stands in for the browser extension in a terminal session: connect hands
/// out the keypair's public key, disconnect clears the connected flag, and
/// signing appends a partial signature for the keypair.
pub struct LocalWalletProvider {
    keypair: Keypair,
    connected: AtomicBool,
}

impl LocalWalletProvider {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(false),
        }
    }

    /// Load the wallet keypair from a Solana CLI keypair file.
    pub fn from_keypair_file(path: &Path) -> ProviderResult<Self> {
        let keypair = read_keypair_file(path).map_err(|e| {
            ProviderError::Unavailable(format!(
                "could not read keypair file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(
            address = %keypair.pubkey(),
            path = %path.display(),
            "Local wallet provider loaded"
        );

        Ok(Self::new(keypair))
    }

    /// Whether a connect has been accepted and not yet disconnected.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for LocalWalletProvider {
    fn is_phantom(&self) -> bool {
        true
    }

    async fn connect(&self) -> ProviderResult<ConnectResponse> {
        self.connected.store(true, Ordering::SeqCst);
        tracing::info!(address = %self.keypair.pubkey(), "Wallet connected");
        Ok(ConnectResponse {
            public_key: self.keypair.pubkey(),
        })
    }

    async fn disconnect(&self) -> ProviderResult<()> {
        self.connected.store(false, Ordering::SeqCst);
        tracing::info!("Wallet disconnected");
        Ok(())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> ProviderResult<Transaction> {
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.keypair], blockhash)
            .map_err(|e| ProviderError::Signing(e.to_string()))?;
        Ok(transaction)
    }
}

impl std::fmt::Debug for LocalWalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWalletProvider")
            .field("address", &self.keypair.pubkey())
            .field("connected", &self.is_connected())
            .finish()
    }
}
