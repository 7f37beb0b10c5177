//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There are no flags and no config files; nothing is persisted.

use std::env;

use serde::{Deserialize, Serialize};

/// Simulator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    ///
    /// Set `MARKETSIM_SEED` to replay the exact same shop day — same stock,
    /// same clients, same checkout drops.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let seed = match env::var("MARKETSIM_SEED").ok() {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidValue("MARKETSIM_SEED".to_string()))?,
            ),
            None => None,
        };

        Ok(SimConfig { seed })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
