//! Devnet SOL transfer demo.
//!
//! # Architecture Overview
//!
//! ```text
//!            ┌───────────────────────────────────────────────┐
//!            │                   SESSION                     │
//!            │                                               │
//!  keypress  │  ┌────────┐   ┌──────────────┐   ┌─────────┐  │
//!  ──────────┼─▶│   ui   │──▶│ orchestrator │──▶│   rpc   │──┼──▶ cluster
//!            │  └────────┘   └──────┬───────┘   └─────────┘  │    (devnet)
//!            │                      │                        │
//!            │                      ▼                        │
//!            │               ┌──────────────┐                │
//!            │               │   provider   │────────────────┼──▶ wallet
//!            │               │   locator    │                │
//!            │               └──────────────┘                │
//!            │                                               │
//!            │  config · observability (cross-cutting)       │
//!            └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use phantom_transfer::config::resolve_config;
use phantom_transfer::observability::init_logging;
use phantom_transfer::provider::ConfiguredHost;
use phantom_transfer::rpc::ClusterClient;
use phantom_transfer::session::Session;
use phantom_transfer::ui::{self, App};

#[derive(Parser)]
#[command(name = "phantom-transfer")]
#[command(about = "Devnet SOL transfer demo: fund a throwaway account and send to a wallet", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the cluster RPC URL
    #[arg(long)]
    cluster: Option<String>,

    /// Report provider detection and exit without starting the UI
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    let config = resolve_config(cli.config.as_deref(), cli.cluster)?;

    tracing::info!(
        cluster_url = %config.cluster.url,
        airdrop_sol = config.amounts.airdrop_sol,
        transfer_sol = config.amounts.transfer_sol,
        "Configuration loaded"
    );

    let gateway = Arc::new(ClusterClient::new(&config.cluster)?);
    let host = ConfiguredHost::from_config(&config.wallet);

    let mut session = Session::new(gateway, config.amounts.clone());
    session.detect(&host);

    if cli.headless {
        if session.provider_detected() {
            println!("provider detected");
        } else {
            println!(
                "no provider found; install Phantom: {}",
                config.wallet.install_url
            );
        }
        return Ok(());
    }

    let mut app = App::new(session, config.wallet.install_url.clone());
    ui::run(&mut app).await?;

    tracing::info!("Session ended");
    Ok(())
}
