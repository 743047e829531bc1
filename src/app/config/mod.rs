//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the user tag (`BETSLIP_USER_ID`).

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

mod logging;
mod service;

pub use logging::LoggingConfig;
pub use service::{StorageConfig, SubmissionConfig, SubmitterKind, UserConfig};

/// Environment variable that overrides `user.id`.
pub const USER_ID_ENV: &str = "BETSLIP_USER_ID";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub user: UserConfig,
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without touching the environment.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(id) = std::env::var(USER_ID_ENV) {
            if !id.trim().is_empty() {
                self.user.id = id;
            }
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let rate = self.submission.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::InvalidValue {
                field: "submission.failure_rate",
                reason: format!("{rate} is outside 0.0..=1.0"),
            }
            .into());
        }
        if self.user.id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "user.id" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
