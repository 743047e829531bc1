//! Application layer - session orchestration, persistence policy and configuration.

mod config;
mod persistence;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::store::{JsonFileStore, MemoryStore};
use crate::adapter::submitter::{LedgerSubmitter, SimulatedSubmitter};
use crate::domain::UserId;
use crate::error::{ConfigError, Result};
use crate::port::{BetSubmitter, LogNotifier, NotifierRegistry, SlipStore};

pub use config::{
    Config, LoggingConfig, StorageConfig, SubmissionConfig, SubmitterKind, UserConfig, USER_ID_ENV,
};
pub use persistence::PersistenceAdapter;
pub use session::{BetSlipSession, PendingSubmission, SubmissionOutcome};

/// Builds a session from configuration.
pub struct App;

impl App {
    /// Open the slip session described by `config`.
    #[allow(clippy::result_large_err)]
    pub fn session(config: &Config) -> Result<BetSlipSession> {
        let slip_path = config.storage.resolved_path();
        let store = build_store(slip_path.clone());
        let submitter = build_submitter(config, slip_path)?;

        Ok(BetSlipSession::open(
            PersistenceAdapter::new(store),
            build_notifier_registry(),
            submitter,
            UserId::new(config.user.id.clone()),
        ))
    }
}

fn build_store(path: Option<PathBuf>) -> Box<dyn SlipStore> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Using slip file");
            Box::new(JsonFileStore::new(path))
        }
        None => {
            warn!("No data directory available, slip will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[allow(clippy::result_large_err)]
fn build_submitter(
    config: &Config,
    slip_path: Option<PathBuf>,
) -> Result<Arc<dyn BetSubmitter>> {
    let submission = &config.submission;
    match submission.mode {
        SubmitterKind::Simulated => Ok(Arc::new(SimulatedSubmitter::new(
            submission.latency(),
            submission.failure_rate,
        ))),
        SubmitterKind::Ledger => {
            let path = submission
                .ledger_path
                .clone()
                .or_else(|| {
                    slip_path.and_then(|p| p.parent().map(|dir| dir.join("bets.jsonl")))
                })
                .ok_or(ConfigError::MissingField {
                    field: "submission.ledger_path",
                })?;
            Ok(Arc::new(LedgerSubmitter::new(path)))
        }
    }
}

fn build_notifier_registry() -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::testkit::domain::{bookmaker, event, h2h, outcome};

    fn config_in(dir: &std::path::Path, mode: &str) -> Config {
        let toml = format!(
            "[storage]\npath = {:?}\n\n[submission]\nmode = {:?}\nlatency_ms = 0\nfailure_rate = 0.0\n",
            dir.join("slip.json"),
            mode
        );
        Config::parse(&toml).unwrap()
    }

    #[test]
    fn session_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "simulated");

        let mut session = App::session(&config).unwrap();
        session.add_selection(event("e1"), h2h(), outcome("Home", dec!(2.5)), bookmaker());
        session.set_stake(dec!(4));
        session.close();

        let reopened = App::session(&config).unwrap();
        assert_eq!(reopened.slip().len(), 1);
        assert_eq!(reopened.slip().potential_payout(), dec!(10));
    }

    #[tokio::test]
    async fn ledger_mode_writes_next_to_slip() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "ledger");

        let mut session = App::session(&config).unwrap();
        session.add_selection(event("e1"), h2h(), outcome("Home", dec!(2.5)), bookmaker());
        session.set_stake(dec!(4));
        assert!(session.request_confirmation());
        let result = session.confirm().await.unwrap();

        assert!(result.success);
        assert!(dir.path().join("bets.jsonl").exists());
    }
}
