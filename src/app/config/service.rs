//! Storage, submission and user configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Where the slip is persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Slip file. Defaults to `<data dir>/betslip/slip.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured path, or the per-user data directory default.
    ///
    /// `None` when no path is configured and no data directory exists.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("betslip").join("slip.json")))
    }
}

/// Which bet backend to submit to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitterKind {
    #[default]
    Simulated,
    Ledger,
}

/// Bet submission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub mode: SubmitterKind,
    /// Simulated round-trip latency.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Probability that a simulated submission fails (0.0-1.0).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    /// Ledger file for `mode = "ledger"`. Defaults next to the slip file.
    #[serde(default)]
    pub ledger_path: Option<PathBuf>,
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_failure_rate() -> f64 {
    0.1
}

impl SubmissionConfig {
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            mode: SubmitterKind::default(),
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
            ledger_path: None,
        }
    }
}

/// The user bets are tagged with.
/// `BETSLIP_USER_ID` overrides the file value at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}
