//! Session orchestrator: ephemeral account state and the four handlers.
//!
//! Owns the provider handle, the generated funding keypair, and the
//! connected account. Nothing here persists; the session dies with the
//! process. Handlers run one at a time on the UI task, and a transfer
//! in flight blocks re-submission of another.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

use crate::config::schema::AmountConfig;
use crate::provider::locator::{locate, ProviderHost};
use crate::provider::wallet::WalletProvider;
use crate::rpc::gateway::RpcGateway;
use crate::session::types::{FundingReceipt, SessionError, SessionResult, TransferReceipt};

/// Per-session orchestration state.
pub struct Session {
    rpc: Arc<dyn RpcGateway>,
    amounts: AmountConfig,
    provider: Option<Arc<dyn WalletProvider>>,
    funding: Option<Keypair>,
    connected: Option<Pubkey>,
    transfer_in_flight: bool,
}

impl Session {
    pub fn new(rpc: Arc<dyn RpcGateway>, amounts: AmountConfig) -> Self {
        Self {
            rpc,
            amounts,
            provider: None,
            funding: None,
            connected: None,
            transfer_in_flight: false,
        }
    }

    /// Run provider detection against the host environment.
    ///
    /// Safe to call repeatedly; the same host yields the same handle.
    pub fn detect(&mut self, host: &dyn ProviderHost) {
        self.provider = locate(host);
        if self.provider.is_some() {
            tracing::info!("Wallet provider detected");
        } else {
            tracing::info!("No wallet provider found");
        }
    }

    pub fn provider_detected(&self) -> bool {
        self.provider.is_some()
    }

    /// Address of the generated funding account, if one exists.
    pub fn funding_address(&self) -> Option<Pubkey> {
        self.funding.as_ref().map(|kp| kp.pubkey())
    }

    /// Public key of the connected wallet account, if connected.
    pub fn connected_account(&self) -> Option<Pubkey> {
        self.connected
    }

    /// Connect action is offered iff a provider is present and nothing is
    /// connected yet.
    pub fn shows_connect(&self) -> bool {
        self.provider_detected() && self.connected.is_none()
    }

    /// Disconnect action is offered iff a provider is present and an account
    /// is connected.
    pub fn shows_disconnect(&self) -> bool {
        self.provider_detected() && self.connected.is_some()
    }

    /// Transfer action is offered iff provider, connected account, and
    /// funding account are all present.
    pub fn shows_transfer(&self) -> bool {
        self.provider_detected() && self.connected.is_some() && self.funding.is_some()
    }

    /// Generate a throwaway funding account and credit it from the faucet.
    ///
    /// The keypair is stored before the faucet call and retained even when
    /// funding fails, so a retry simply overwrites it with a fresh one.
    pub async fn create_funding_account(&mut self) -> SessionResult<FundingReceipt> {
        let keypair = Keypair::new();
        let address = keypair.pubkey();
        tracing::info!(address = %address, "Funding account generated");
        self.funding = Some(keypair);

        let lamports = self.amounts.airdrop_lamports();
        tracing::info!(address = %address, lamports, "Requesting faucet airdrop");
        let airdrop_signature = self.rpc.request_airdrop(&address, lamports).await?;

        let token = self.rpc.latest_blockhash().await?;
        self.rpc
            .confirm_transaction(&airdrop_signature, &token)
            .await?;

        let balance = self.rpc.balance(&address).await?;
        tracing::info!(address = %address, balance, "Funding account credited");

        Ok(FundingReceipt {
            address,
            airdrop_signature,
            balance,
        })
    }

    /// Ask the provider for its active account, storing it on success.
    ///
    /// A rejected prompt leaves state unchanged.
    pub async fn connect(&mut self) -> SessionResult<Pubkey> {
        let provider = self.provider.clone().ok_or(SessionError::NoProvider)?;

        match provider.connect().await {
            Ok(response) => {
                self.connected = Some(response.public_key);
                tracing::info!(account = %response.public_key, "Wallet connected");
                Ok(response.public_key)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Wallet connect rejected");
                Err(SessionError::ConnectRejected(e))
            }
        }
    }

    /// Disconnect the wallet, clearing exactly the connected account.
    ///
    /// The funding account is deliberately left alone. A failed disconnect
    /// leaves state unchanged.
    pub async fn disconnect(&mut self) -> SessionResult<()> {
        let provider = self.provider.clone().ok_or(SessionError::NoProvider)?;

        match provider.disconnect().await {
            Ok(()) => {
                self.connected = None;
                tracing::info!("Wallet disconnected");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Wallet disconnect failed");
                Err(SessionError::DisconnectFailed(e))
            }
        }
    }

    /// Move the fixed transfer amount from the funding account to the
    /// connected wallet.
    ///
    /// A silent no-op (`Ok(None)`) when preconditions are missing or a
    /// transfer is already in flight; no network call is made and no state
    /// changes in that case.
    pub async fn transfer(&mut self) -> SessionResult<Option<TransferReceipt>> {
        if self.funding.is_none() || self.connected.is_none() {
            return Ok(None);
        }
        if self.transfer_in_flight {
            tracing::debug!("Transfer already in flight, ignoring");
            return Ok(None);
        }

        self.transfer_in_flight = true;
        let result = self.execute_transfer().await;
        self.transfer_in_flight = false;
        result
    }

    async fn execute_transfer(&self) -> SessionResult<Option<TransferReceipt>> {
        let (Some(funding), Some(recipient)) = (self.funding.as_ref(), self.connected) else {
            return Ok(None);
        };

        let lamports = self.amounts.transfer_lamports();
        let sender = funding.pubkey();
        tracing::info!(from = %sender, to = %recipient, lamports, "Submitting transfer");

        let token = self.rpc.latest_blockhash().await?;
        let instruction = system_instruction::transfer(&sender, &recipient, lamports);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&sender),
            &[funding],
            token.blockhash,
        );

        let signature = self.rpc.send_and_confirm(&transaction).await?;
        let sender_balance = self.rpc.balance(&sender).await?;
        let receiver_balance = self.rpc.balance(&recipient).await?;

        tracing::info!(
            signature = %signature,
            sender_balance,
            receiver_balance,
            "Transfer confirmed"
        );

        Ok(Some(TransferReceipt {
            signature,
            sender_balance,
            receiver_balance,
        }))
    }

    #[cfg(test)]
    pub(crate) fn force_transfer_in_flight(&mut self) {
        self.transfer_in_flight = true;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("provider_detected", &self.provider_detected())
            .field("funding", &self.funding_address())
            .field("connected", &self.connected)
            .field("transfer_in_flight", &self.transfer_in_flight)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::locator::ConfiguredHost;
    use crate::provider::types::{ConnectResponse, ProviderError, ProviderResult};
    use crate::rpc::types::{FreshnessToken, RpcResult};
    use async_trait::async_trait;
    use solana_sdk::hash::Hash;
    use solana_sdk::signature::Signature;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubGateway {
        calls: AtomicUsize,
        airdrops: Mutex<Vec<(Pubkey, u64)>>,
    }

    #[async_trait]
    impl RpcGateway for StubGateway {
        async fn balance(&self, _account: &Pubkey) -> RpcResult<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        }

        async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> RpcResult<Signature> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.airdrops.lock().unwrap().push((*account, lamports));
            Ok(Signature::default())
        }

        async fn latest_blockhash(&self) -> RpcResult<FreshnessToken> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FreshnessToken {
                blockhash: Hash::new_unique(),
                last_valid_block_height: 100,
            })
        }

        async fn confirm_transaction(
            &self,
            _signature: &Signature,
            _token: &FreshnessToken,
        ) -> RpcResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn send_and_confirm(&self, _transaction: &Transaction) -> RpcResult<Signature> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Signature::default())
        }
    }

    struct StubProvider {
        account: Pubkey,
        reject_connect: bool,
    }

    #[async_trait]
    impl WalletProvider for StubProvider {
        fn is_phantom(&self) -> bool {
            true
        }

        async fn connect(&self) -> ProviderResult<ConnectResponse> {
            if self.reject_connect {
                Err(ProviderError::Rejected("user declined".to_string()))
            } else {
                Ok(ConnectResponse {
                    public_key: self.account,
                })
            }
        }

        async fn disconnect(&self) -> ProviderResult<()> {
            Ok(())
        }

        async fn sign_transaction(&self, tx: Transaction) -> ProviderResult<Transaction> {
            Ok(tx)
        }
    }

    fn session_with(provider: Option<StubProvider>) -> (Session, Arc<StubGateway>) {
        let gateway = Arc::new(StubGateway::default());
        let mut session = Session::new(gateway.clone(), AmountConfig::default());
        if let Some(p) = provider {
            let host = ConfiguredHost::with_provider(Arc::new(p));
            session.detect(&host);
        } else {
            session.detect(&ConfiguredHost::absent());
        }
        (session, gateway)
    }

    fn phantom(account: Pubkey) -> StubProvider {
        StubProvider {
            account,
            reject_connect: false,
        }
    }

    #[tokio::test]
    async fn test_visibility_without_provider() {
        let (session, _) = session_with(None);
        assert!(!session.provider_detected());
        assert!(!session.shows_connect());
        assert!(!session.shows_disconnect());
        assert!(!session.shows_transfer());
    }

    #[tokio::test]
    async fn test_visibility_progression() {
        let wallet = Pubkey::new_unique();
        let (mut session, _) = session_with(Some(phantom(wallet)));

        // ProviderDetected
        assert!(session.shows_connect());
        assert!(!session.shows_disconnect());
        assert!(!session.shows_transfer());

        // FundingAccountCreated
        session.create_funding_account().await.unwrap();
        assert!(session.shows_connect());
        assert!(!session.shows_transfer());

        // WalletConnected → TransferEnabled
        session.connect().await.unwrap();
        assert!(!session.shows_connect());
        assert!(session.shows_disconnect());
        assert!(session.shows_transfer());
    }

    #[tokio::test]
    async fn test_transfer_is_noop_without_preconditions() {
        let wallet = Pubkey::new_unique();
        let (mut session, gateway) = session_with(Some(phantom(wallet)));

        // No funding account, no connected account.
        assert!(session.transfer().await.unwrap().is_none());

        // Connected but unfunded.
        session.connect().await.unwrap();
        assert!(session.transfer().await.unwrap().is_none());

        // connect() is a provider call, not a gateway call.
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transfer_noop_while_in_flight() {
        let wallet = Pubkey::new_unique();
        let (mut session, gateway) = session_with(Some(phantom(wallet)));
        session.create_funding_account().await.unwrap();
        session.connect().await.unwrap();

        let calls_before = gateway.calls.load(Ordering::SeqCst);
        session.force_transfer_in_flight();
        assert!(session.transfer().await.unwrap().is_none());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), calls_before);
    }

    #[tokio::test]
    async fn test_disconnect_clears_only_connected_account() {
        let wallet = Pubkey::new_unique();
        let (mut session, _) = session_with(Some(phantom(wallet)));
        session.create_funding_account().await.unwrap();
        session.connect().await.unwrap();
        let funding = session.funding_address();

        session.disconnect().await.unwrap();

        assert!(session.connected_account().is_none());
        assert_eq!(session.funding_address(), funding);
        assert!(session.shows_connect());
    }

    #[tokio::test]
    async fn test_rejected_connect_leaves_state_unchanged() {
        let (mut session, _) = session_with(Some(StubProvider {
            account: Pubkey::new_unique(),
            reject_connect: true,
        }));

        let result = session.connect().await;
        assert!(matches!(result, Err(SessionError::ConnectRejected(_))));
        assert!(session.connected_account().is_none());
        assert!(session.shows_connect());
    }

    #[tokio::test]
    async fn test_connect_without_provider_is_typed_error() {
        let (mut session, _) = session_with(None);
        assert!(matches!(
            session.connect().await,
            Err(SessionError::NoProvider)
        ));
    }

    #[tokio::test]
    async fn test_create_funding_account_requests_configured_airdrop() {
        let wallet = Pubkey::new_unique();
        let (mut session, gateway) = session_with(Some(phantom(wallet)));

        let receipt = session.create_funding_account().await.unwrap();
        assert_eq!(Some(receipt.address), session.funding_address());

        let airdrops = gateway.airdrops.lock().unwrap();
        assert_eq!(airdrops.len(), 1);
        assert_eq!(airdrops[0].0, receipt.address);
        assert_eq!(airdrops[0].1, AmountConfig::default().airdrop_lamports());
    }

    #[tokio::test]
    async fn test_recreate_overwrites_funding_account() {
        let wallet = Pubkey::new_unique();
        let (mut session, _) = session_with(Some(phantom(wallet)));

        let first = session.create_funding_account().await.unwrap().address;
        let second = session.create_funding_account().await.unwrap().address;
        assert_ne!(first, second);
        assert_eq!(session.funding_address(), Some(second));
    }
}
