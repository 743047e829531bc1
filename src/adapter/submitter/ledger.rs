//! Append-only JSON-lines bet ledger.
//!
//! Each accepted ticket becomes one pending [`BetRecord`] line. Stands in for
//! a remote bet store when running locally.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::domain::{BetId, BetRecord, BetTicket};
use crate::error::SubmissionError;
use crate::port::BetSubmitter;

pub struct LedgerSubmitter {
    path: PathBuf,
}

impl LedgerSubmitter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, record: &BetRecord) -> std::io::Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

#[async_trait]
impl BetSubmitter for LedgerSubmitter {
    async fn submit(&self, ticket: &BetTicket) -> Result<BetId, SubmissionError> {
        ticket.validate()?;

        let id = BetId::new(uuid::Uuid::new_v4().to_string());
        let record = BetRecord::pending(id.clone(), ticket);
        self.append(&record)
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        info!(bet_id = %id, user_id = %ticket.user_id, "Bet recorded");
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "ledger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetStatus, BookmakerKey, MarketKey, Outcome, Slip, SportEvent, UserId};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn ticket(stake: rust_decimal::Decimal) -> BetTicket {
        let mut slip = Slip::new();
        slip.add_selection(
            SportEvent::new("e1", "soccer_epl", Utc::now(), "Home", "Away"),
            MarketKey::new("h2h"),
            Outcome::new("Home", dec!(1.75)),
            BookmakerKey::new("unibet"),
        );
        slip.set_stake(stake);
        BetTicket::capture(&slip, &UserId::new("u1"))
    }

    #[tokio::test]
    async fn appends_one_pending_record_per_bet() {
        let dir = tempfile::tempdir().unwrap();
        let submitter = LedgerSubmitter::new(dir.path().join("bets").join("ledger.jsonl"));

        let first = submitter.submit(&ticket(dec!(10))).await.unwrap();
        let second = submitter.submit(&ticket(dec!(20))).await.unwrap();
        assert_ne!(first, second);

        let content = std::fs::read_to_string(submitter.path()).unwrap();
        let records: Vec<BetRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first);
        assert_eq!(records[0].status, BetStatus::Pending);
        assert_eq!(records[1].stake, dec!(20));
        assert_eq!(records[1].potential_payout, dec!(35));
    }

    #[tokio::test]
    async fn invalid_stake_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let submitter = LedgerSubmitter::new(dir.path().join("ledger.jsonl"));

        let err = submitter.submit(&ticket(dec!(0))).await.unwrap_err();
        assert_eq!(err, SubmissionError::InvalidStake);
        assert!(!submitter.path().exists());
    }
}
