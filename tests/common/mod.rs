//! Shared test doubles for the session integration tests.

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use phantom_transfer::provider::{ConnectResponse, ProviderError, ProviderResult, WalletProvider};
use phantom_transfer::rpc::{FreshnessToken, RpcError, RpcGateway, RpcResult};

/// Programmable gateway double with a tiny in-memory ledger.
#[derive(Default)]
pub struct MockGateway {
    pub balances: Mutex<HashMap<Pubkey, u64>>,
    pub airdrops: Mutex<Vec<(Pubkey, u64)>>,
    pub confirmed: Mutex<Vec<Signature>>,
    pub sent: Mutex<Vec<Transaction>>,
    pub fail_faucet: AtomicBool,
}

impl MockGateway {
    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        *self.balances.lock().unwrap().get(account).unwrap_or(&0)
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl RpcGateway for MockGateway {
    async fn balance(&self, account: &Pubkey) -> RpcResult<u64> {
        Ok(self.balance_of(account))
    }

    async fn request_airdrop(&self, account: &Pubkey, lamports: u64) -> RpcResult<Signature> {
        if self.fail_faucet.load(Ordering::SeqCst) {
            return Err(RpcError::FaucetUnavailable("faucet offline".to_string()));
        }
        self.airdrops.lock().unwrap().push((*account, lamports));
        *self.balances.lock().unwrap().entry(*account).or_insert(0) += lamports;
        Ok(Signature::new_unique())
    }

    async fn latest_blockhash(&self) -> RpcResult<FreshnessToken> {
        Ok(FreshnessToken {
            blockhash: Hash::new_unique(),
            last_valid_block_height: 500,
        })
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        _token: &FreshnessToken,
    ) -> RpcResult<()> {
        self.confirmed.lock().unwrap().push(*signature);
        Ok(())
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> RpcResult<Signature> {
        let (from, to, lamports) = decode_system_transfer(transaction);
        {
            let mut balances = self.balances.lock().unwrap();
            let sender = balances.entry(from).or_insert(0);
            *sender = sender.saturating_sub(lamports);
            *balances.entry(to).or_insert(0) += lamports;
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(Signature::new_unique())
    }
}

/// Decode the single SystemProgram transfer instruction of a transaction.
///
/// Instruction data layout: u32 LE discriminant (2 = Transfer) followed by
/// the u64 LE lamport amount.
pub fn decode_system_transfer(transaction: &Transaction) -> (Pubkey, Pubkey, u64) {
    let message = &transaction.message;
    assert_eq!(
        message.instructions.len(),
        1,
        "expected exactly one instruction"
    );

    let instruction = &message.instructions[0];
    assert_eq!(
        message.account_keys[instruction.program_id_index as usize],
        solana_sdk::system_program::id(),
        "expected a SystemProgram instruction"
    );
    assert_eq!(
        u32::from_le_bytes(instruction.data[0..4].try_into().unwrap()),
        2,
        "expected the Transfer discriminant"
    );

    let from = message.account_keys[instruction.accounts[0] as usize];
    let to = message.account_keys[instruction.accounts[1] as usize];
    let lamports = u64::from_le_bytes(instruction.data[4..12].try_into().unwrap());
    (from, to, lamports)
}

/// Programmable wallet provider double.
pub struct MockProvider {
    pub account: Pubkey,
    pub phantom: bool,
    pub reject_connect: AtomicBool,
    pub fail_disconnect: AtomicBool,
    pub connects: AtomicUsize,
    pub disconnects: AtomicUsize,
}

impl MockProvider {
    pub fn new(account: Pubkey) -> Self {
        Self {
            account,
            phantom: true,
            reject_connect: AtomicBool::new(false),
            fail_disconnect: AtomicBool::new(false),
            connects: AtomicUsize::new(0),
            disconnects: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    async fn connect(&self) -> ProviderResult<ConnectResponse> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.reject_connect.load(Ordering::SeqCst) {
            return Err(ProviderError::Rejected("user declined".to_string()));
        }
        Ok(ConnectResponse {
            public_key: self.account,
        })
    }

    async fn disconnect(&self) -> ProviderResult<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.fail_disconnect.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable("extension crashed".to_string()));
        }
        Ok(())
    }

    async fn sign_transaction(&self, transaction: Transaction) -> ProviderResult<Transaction> {
        Ok(transaction)
    }
}
