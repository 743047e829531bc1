//! Submitted bet snapshot and the record handed to bet storage.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Amount, BetId, Price, Selection, Slip, Stake, UserId};
use crate::error::SubmissionError;

/// Frozen copy of the slip taken at the moment the user confirms.
///
/// Later edits to the live slip do not reach an in-flight ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetTicket {
    pub user_id: UserId,
    pub selections: Vec<Selection>,
    pub total_odds: Price,
    pub stake: Stake,
    pub potential_payout: Amount,
    pub created_at: DateTime<Utc>,
}

impl BetTicket {
    /// Snapshot the slip for a user.
    #[must_use]
    pub fn capture(slip: &Slip, user_id: &UserId) -> Self {
        Self {
            user_id: user_id.clone(),
            selections: slip.selections().to_vec(),
            total_odds: slip.total_odds(),
            stake: slip.stake(),
            potential_payout: slip.potential_payout(),
            created_at: Utc::now(),
        }
    }

    /// Business rules checked at submit time.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.selections.is_empty() {
            return Err(SubmissionError::EmptySlip);
        }
        if self.stake <= Decimal::ZERO {
            return Err(SubmissionError::InvalidStake);
        }
        Ok(())
    }
}

/// Lifecycle of a stored bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Voided,
}

/// A finalized bet as stored by the bet backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub id: BetId,
    pub user_id: UserId,
    pub items: Vec<Selection>,
    pub total_odds: Price,
    pub stake: Stake,
    pub potential_payout: Amount,
    pub status: BetStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
}

impl BetRecord {
    /// A new pending record for a ticket.
    #[must_use]
    pub fn pending(id: BetId, ticket: &BetTicket) -> Self {
        Self {
            id,
            user_id: ticket.user_id.clone(),
            items: ticket.selections.clone(),
            total_odds: ticket.total_odds,
            stake: ticket.stake,
            potential_payout: ticket.potential_payout,
            status: BetStatus::Pending,
            created_at: ticket.created_at,
            settled_at: None,
        }
    }
}
