//! Terminal application state and action dispatch.

use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::session::Session;

/// User-triggerable actions, rendered as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateAccount,
    Connect,
    Disconnect,
    Transfer,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::CreateAccount => "Create a New Solana Account",
            Action::Connect => "Connect to Phantom Wallet",
            Action::Disconnect => "Disconnect from Wallet",
            Action::Transfer => "Transfer SOL to Phantom Wallet",
            Action::Quit => "Quit",
        }
    }
}

/// How many status lines are kept for display.
const STATUS_CAPACITY: usize = 100;

/// Terminal application: session state plus presentation concerns.
pub struct App {
    pub session: Session,
    pub install_url: String,
    status: Vec<String>,
    selected: usize,
}

impl App {
    pub fn new(session: Session, install_url: String) -> Self {
        Self {
            session,
            install_url,
            status: Vec::new(),
            selected: 0,
        }
    }

    /// Actions currently offered, in render order.
    ///
    /// Mirrors the conditional rendering of the session state machine:
    /// create is always offered, connect/disconnect/transfer appear per the
    /// session view helpers, quit is always last.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::CreateAccount];
        if self.session.shows_connect() {
            actions.push(Action::Connect);
        }
        if self.session.shows_disconnect() {
            actions.push(Action::Disconnect);
        }
        if self.session.shows_transfer() {
            actions.push(Action::Transfer);
        }
        actions.push(Action::Quit);
        actions
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let count = self.actions().len();
        self.selected = (self.selected + 1) % count;
    }

    pub fn select_previous(&mut self) {
        let count = self.actions().len();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn status_lines(&self) -> &[String] {
        &self.status
    }

    pub fn push_status(&mut self, line: impl Into<String>) {
        if self.status.len() == STATUS_CAPACITY {
            self.status.remove(0);
        }
        self.status.push(line.into());
    }

    /// Run the selected action to completion. Returns true when the user
    /// chose to quit.
    pub async fn activate(&mut self) -> bool {
        let Some(action) = self.actions().get(self.selected).copied() else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::CreateAccount => self.create_account().await,
            Action::Connect => self.connect().await,
            Action::Disconnect => self.disconnect().await,
            Action::Transfer => self.transfer().await,
        }

        // The action set may have shrunk (e.g. after connect).
        self.selected = self.selected.min(self.actions().len() - 1);
        false
    }

    async fn create_account(&mut self) {
        self.push_status("Creating funding account...");
        match self.session.create_funding_account().await {
            Ok(receipt) => {
                self.push_status(format!("Funding account: {}", receipt.address));
                self.push_status(format!("Airdrop confirmed: {}", receipt.airdrop_signature));
                self.push_status(format!("Wallet balance: {} SOL", sol(receipt.balance)));
            }
            Err(e) => self.push_status(format!("Funding failed: {}", e)),
        }
    }

    async fn connect(&mut self) {
        match self.session.connect().await {
            Ok(account) => self.push_status(format!("Connected wallet: {}", account)),
            Err(e) => self.push_status(format!("Connect failed: {}", e)),
        }
    }

    async fn disconnect(&mut self) {
        match self.session.disconnect().await {
            Ok(()) => self.push_status("Wallet disconnected"),
            Err(e) => self.push_status(format!("Disconnect failed: {}", e)),
        }
    }

    async fn transfer(&mut self) {
        self.push_status("Submitting transfer...");
        match self.session.transfer().await {
            Ok(Some(receipt)) => {
                self.push_status(format!("Transfer confirmed: {}", receipt.signature));
                self.push_status(format!("Sender balance: {} SOL", sol(receipt.sender_balance)));
                self.push_status(format!(
                    "Receiver balance: {} SOL",
                    sol(receipt.receiver_balance)
                ));
            }
            // Preconditions missing or a transfer already in flight.
            Ok(None) => {}
            Err(e) => self.push_status(format!("Transfer failed: {}", e)),
        }
    }
}

/// Lamports rendered as whole-unit SOL for display.
fn sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
