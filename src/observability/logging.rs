//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Route logs to stderr so the terminal UI owns stdout
//! - Allow level overrides via `RUST_LOG`
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Addresses, lamport amounts, and signatures are logged as fields;
//!   private key material never is

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "phantom_transfer=info";

/// Install the global tracing subscriber.
///
/// Must be called at most once per process; later calls are ignored.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
