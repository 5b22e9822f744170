//! Wallet provider detection.
//!
//! The host environment is an explicit capability passed in rather than a
//! mutable global, so the absent case is a first-class value and tests can
//! inject doubles.

use std::sync::Arc;

use crate::config::schema::WalletConfig;
use crate::provider::wallet::{LocalWalletProvider, WalletProvider};

/// Host environment that may carry an injected wallet provider.
pub trait ProviderHost {
    /// The injected provider handle, if any.
    fn injected(&self) -> Option<Arc<dyn WalletProvider>>;
}

/// Look up the wallet provider in the host environment.
///
/// Returns the provider iff one is injected AND it self-identifies as the
/// expected extension. Absence is a valid state, not an error. Locating
/// twice against the same host yields the identical handle.
pub fn locate(host: &dyn ProviderHost) -> Option<Arc<dyn WalletProvider>> {
    let provider = host.injected()?;
    if provider.is_phantom() {
        Some(provider)
    } else {
        tracing::debug!("Injected provider does not self-identify, ignoring");
        None
    }
}

/// Host built from configuration.
///
/// Carries a local keypair-backed provider when one is configured and loads,
/// and nothing otherwise.
pub struct ConfiguredHost {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl ConfiguredHost {
    /// Build the host from wallet configuration.
    ///
    /// A missing or unreadable keypair file degrades to an absent provider;
    /// the UI shows the install hint in that case.
    pub fn from_config(config: &WalletConfig) -> Self {
        let provider = match &config.keypair_path {
            Some(path) => match LocalWalletProvider::from_keypair_file(path.as_ref()) {
                Ok(provider) => Some(Arc::new(provider) as Arc<dyn WalletProvider>),
                Err(e) => {
                    tracing::warn!(error = %e, "Wallet keypair unusable, no provider injected");
                    None
                }
            },
            None => None,
        };

        Self { provider }
    }

    /// Host with no injected provider.
    pub fn absent() -> Self {
        Self { provider: None }
    }

    /// Host carrying the given provider.
    pub fn with_provider(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }
}

impl ProviderHost for ConfiguredHost {
    fn injected(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.clone()
    }
}
