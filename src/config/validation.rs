//! Semantic configuration checks, separate from serde's syntactic parsing.

use crate::config::schema::{AmountConfig, AppConfig};

/// A single semantic problem found in a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.cluster.url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "cluster.url".to_string(),
            message: format!("'{}' is not a valid URL", config.cluster.url),
        });
    }

    if config.cluster.commitment_config().is_none() {
        errors.push(ValidationError {
            field: "cluster.commitment".to_string(),
            message: format!(
                "'{}' is not one of processed, confirmed, finalized",
                config.cluster.commitment
            ),
        });
    }

    if config.cluster.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "cluster.rpc_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.amounts.airdrop_sol == 0 {
        errors.push(ValidationError {
            field: "amounts.airdrop_sol".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.amounts.airdrop_sol > AmountConfig::MAX_SOL {
        errors.push(ValidationError {
            field: "amounts.airdrop_sol".to_string(),
            message: format!(
                "{} SOL exceeds the representable lamport range (max {})",
                config.amounts.airdrop_sol,
                AmountConfig::MAX_SOL
            ),
        });
    }

    if config.amounts.transfer_sol == 0 {
        errors.push(ValidationError {
            field: "amounts.transfer_sol".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    // The transfer is funded entirely by the airdrop; fees come out of the
    // remainder, so the airdrop must strictly exceed the transfer.
    if config.amounts.transfer_sol >= config.amounts.airdrop_sol
        && config.amounts.airdrop_sol != 0
    {
        errors.push(ValidationError {
            field: "amounts.transfer_sol".to_string(),
            message: format!(
                "transfer of {} SOL leaves no fee headroom out of a {} SOL airdrop",
                config.amounts.transfer_sol, config.amounts.airdrop_sol
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
