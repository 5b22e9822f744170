//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional) + CLI overrides
//!     → loader.rs (resolve: file or defaults, apply overrides)
//!     → validation.rs (semantic checks, once on the final result)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the binary runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError};
pub use schema::{AmountConfig, AppConfig, ClusterConfig, WalletConfig};
