//! Confirm → submit → result state machine.
//!
//! The machine is synchronous; the async submit call happens between
//! [`SubmissionMachine::begin`] and [`SubmissionMachine::complete`].

use std::fmt;

use rust_decimal::Decimal;

use super::{BetId, BetTicket, Slip, UserId};
use crate::error::SubmissionError;

/// Outcome shown to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    pub bet_id: Option<BetId>,
}

impl SubmissionResult {
    #[must_use]
    pub fn succeeded(bet_id: BetId) -> Self {
        Self {
            success: true,
            message: format!("Bet placed successfully! Bet ID: {bet_id}"),
            bet_id: Some(bet_id),
        }
    }

    #[must_use]
    pub fn failed(error: &SubmissionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            bet_id: None,
        }
    }
}

/// Current position in the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    AwaitingConfirmation,
    Submitting,
    Succeeded(SubmissionResult),
    Failed(SubmissionResult),
}

impl SubmissionState {
    /// Returns true while a submit call is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The result of the last finished submission, if still shown.
    #[must_use]
    pub const fn result(&self) -> Option<&SubmissionResult> {
        match self {
            Self::Succeeded(result) | Self::Failed(result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingConfirmation => "awaiting confirmation",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
}

impl SubmissionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Ask the user to confirm.
    ///
    /// Only moves to `AwaitingConfirmation` when the slip has a selection and
    /// a positive stake. A shown result is replaced, so a failed bet can be
    /// retried.
    pub fn request_confirmation(&mut self, slip: &Slip) -> bool {
        let ready = !slip.is_empty() && slip.stake() > Decimal::ZERO;
        let open = matches!(
            self.state,
            SubmissionState::Idle | SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        );
        if !(ready && open) {
            return false;
        }
        self.state = SubmissionState::AwaitingConfirmation;
        true
    }

    /// Dismiss the confirmation prompt.
    pub fn cancel(&mut self) -> bool {
        if self.state == SubmissionState::AwaitingConfirmation {
            self.state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }

    /// Confirm and capture the ticket. `None` unless awaiting confirmation.
    pub fn begin(&mut self, slip: &Slip, user_id: &UserId) -> Option<BetTicket> {
        if self.state != SubmissionState::AwaitingConfirmation {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(BetTicket::capture(slip, user_id))
    }

    /// Record the collaborator's answer. Ignored unless submitting.
    pub fn complete(
        &mut self,
        outcome: Result<BetId, SubmissionError>,
    ) -> Option<SubmissionResult> {
        if !self.state.is_submitting() {
            return None;
        }
        let (state, result) = match outcome {
            Ok(bet_id) => {
                let result = SubmissionResult::succeeded(bet_id);
                (SubmissionState::Succeeded(result.clone()), result)
            }
            Err(error) => {
                let result = SubmissionResult::failed(&error);
                (SubmissionState::Failed(result.clone()), result)
            }
        };
        self.state = state;
        Some(result)
    }

    /// Drop a shown result so it is not displayed next to new slip contents.
    pub fn dismiss_result(&mut self) {
        if self.state.result().is_some() {
            self.state = SubmissionState::Idle;
        }
    }
}
