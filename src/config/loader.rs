//! Configuration resolution: file, defaults, and CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Errors that can occur while resolving the effective configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the schema.
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The resolved configuration failed semantic validation.
    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the effective configuration for a run.
///
/// Loads the TOML file when a path is given and falls back to the devnet
/// defaults otherwise, then applies the cluster URL override. Validation
/// runs once, on the final result, so an override is checked the same way
/// a file value is.
pub fn resolve_config(
    path: Option<&Path>,
    cluster_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => AppConfig::default(),
    };

    if let Some(url) = cluster_url {
        config.cluster.url = url;
    }

    validate_config(&config).map_err(ConfigError::Invalid)?;

    Ok(config)
}
