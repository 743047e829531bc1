//! The owned, process-wide bet slip.
//!
//! [`BetSlipSession`] wraps the pure [`Slip`] and [`SubmissionMachine`] and
//! adds the side effects: every applied mutation dismisses a stale result,
//! is persisted best-effort, then reported to the notifiers.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{
    select_or_deselect, BetId, BetTicket, BookmakerKey, MarketKey, Outcome, Selection,
    SelectionAction, SelectionId, Slip, SlipChange, SportEvent, Stake, SubmissionMachine,
    SubmissionResult, SubmissionState, UserId,
};
use crate::error::SubmissionError;
use crate::port::{
    BetSubmitter, Event, NotifierRegistry, SelectionEvent, SubmissionEvent, SubmissionResultEvent,
};

use super::persistence::PersistenceAdapter;

/// A confirmed bet waiting for the submitter.
///
/// Holds its own ticket and submitter handle, so the session stays free for
/// edits while [`run`](Self::run) is awaited.
pub struct PendingSubmission {
    ticket: BetTicket,
    submitter: Arc<dyn BetSubmitter>,
}

impl PendingSubmission {
    #[must_use]
    pub fn ticket(&self) -> &BetTicket {
        &self.ticket
    }

    #[must_use]
    pub fn submitter_name(&self) -> &'static str {
        self.submitter.name()
    }

    /// Submit the ticket. Runs to completion; there is no cancellation.
    pub async fn run(self) -> SubmissionOutcome {
        let result = self.submitter.submit(&self.ticket).await;
        SubmissionOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// What the submitter answered for a ticket.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub ticket: BetTicket,
    pub result: Result<BetId, SubmissionError>,
}

pub struct BetSlipSession {
    slip: Slip,
    machine: SubmissionMachine,
    persistence: PersistenceAdapter,
    notifiers: NotifierRegistry,
    submitter: Arc<dyn BetSubmitter>,
    user_id: UserId,
}

impl BetSlipSession {
    /// Open a session, restoring the slip from persistence.
    #[must_use]
    pub fn open(
        persistence: PersistenceAdapter,
        notifiers: NotifierRegistry,
        submitter: Arc<dyn BetSubmitter>,
        user_id: UserId,
    ) -> Self {
        let slip = persistence.load();
        info!(
            selections = slip.len(),
            submitter = submitter.name(),
            "Bet slip session opened"
        );
        Self {
            slip,
            machine: SubmissionMachine::new(),
            persistence,
            notifiers,
            submitter,
            user_id,
        }
    }

    #[must_use]
    pub fn slip(&self) -> &Slip {
        &self.slip
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        self.machine.state()
    }

    /// Result of the last submission, while it is still shown.
    #[must_use]
    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.machine.state().result()
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Add a selection, replacing any held for the same event.
    ///
    /// `None` if the slip rejected it because the odds could not be priced.
    pub fn add_selection(
        &mut self,
        event: SportEvent,
        market: MarketKey,
        outcome: Outcome,
        bookmaker: BookmakerKey,
    ) -> Option<SelectionId> {
        let selection = Selection::new(event, market, outcome, bookmaker);
        let id = selection.id().clone();
        let change = self.slip.insert(selection);
        self.apply_if_some(change).then_some(id)
    }

    /// Remove a selection; false if it was not on the slip.
    pub fn remove_selection(&mut self, id: &SelectionId) -> bool {
        match self.slip.remove_selection(id) {
            Some(change) => {
                self.apply(change);
                true
            }
            None => false,
        }
    }

    /// Empty the slip and return how many selections were dropped.
    pub fn clear(&mut self) -> usize {
        let change = self.slip.clear();
        let removed = match &change {
            SlipChange::Cleared { removed } => *removed,
            _ => 0,
        };
        self.apply(change);
        removed
    }

    /// Set the stake; false if the amount was rejected.
    pub fn set_stake(&mut self, amount: Stake) -> bool {
        let change = self.slip.set_stake(amount);
        self.apply_if_some(change)
    }

    /// Set the stake from form input; false if the input was rejected.
    pub fn set_stake_input(&mut self, input: &str) -> bool {
        let change = self.slip.set_stake_input(input);
        self.apply_if_some(change)
    }

    /// Set the stake from a float; false if the value was rejected.
    pub fn set_stake_f64(&mut self, amount: f64) -> bool {
        let change = self.slip.set_stake_f64(amount);
        self.apply_if_some(change)
    }

    /// Click on an outcome: deselect it if already held, otherwise add it.
    ///
    /// `None` if the slip rejected the change.
    pub fn select_or_deselect(
        &mut self,
        event: SportEvent,
        market: MarketKey,
        outcome: Outcome,
        bookmaker: BookmakerKey,
    ) -> Option<SelectionAction> {
        let action = select_or_deselect(&self.slip, &event.id, &market, &outcome.name);
        let applied = match &action {
            SelectionAction::Remove(id) => self.remove_selection(id),
            SelectionAction::Add => self.add_selection(event, market, outcome, bookmaker).is_some(),
        };
        applied.then_some(action)
    }

    /// Show the confirmation prompt; false if the slip is not ready.
    pub fn request_confirmation(&mut self) -> bool {
        self.machine.request_confirmation(&self.slip)
    }

    pub fn cancel_confirmation(&mut self) -> bool {
        self.machine.cancel()
    }

    /// Confirm the bet and capture the ticket.
    ///
    /// `None` unless awaiting confirmation; in particular a second confirm
    /// while a submission is in flight is rejected.
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        let ticket = self.machine.begin(&self.slip, &self.user_id)?;
        info!(
            selections = ticket.selections.len(),
            total_odds = %ticket.total_odds,
            stake = %ticket.stake,
            "Submitting bet"
        );
        self.notifiers
            .notify_all(Event::SubmissionConfirmed(SubmissionEvent {
                event_ids: ticket
                    .selections
                    .iter()
                    .map(|s| s.event_id().to_string())
                    .collect(),
                total_odds: ticket.total_odds,
                stake: ticket.stake,
            }));
        Some(PendingSubmission {
            ticket,
            submitter: Arc::clone(&self.submitter),
        })
    }

    /// Apply the submitter's answer.
    ///
    /// On success the slip is cleared and the stake reset; on failure the
    /// slip is left as it is so the user can retry.
    pub fn finish_submission(&mut self, outcome: SubmissionOutcome) -> Option<SubmissionResult> {
        let succeeded = outcome.result.is_ok();
        let result = self.machine.complete(outcome.result)?;

        if succeeded {
            let cleared = self.slip.clear();
            self.slip.set_stake(Decimal::ZERO);
            self.persistence.save(&self.slip);
            self.emit(&cleared);
            info!(message = %result.message, "Bet placed");
        } else {
            warn!(message = %result.message, "Bet submission failed");
        }

        self.notifiers
            .notify_all(Event::SubmissionCompleted(SubmissionResultEvent::from(&result)));
        Some(result)
    }

    /// Confirm, submit and apply the result in one step.
    pub async fn confirm(&mut self) -> Option<SubmissionResult> {
        let pending = self.begin_submission()?;
        let outcome = pending.run().await;
        self.finish_submission(outcome)
    }

    /// End the session with a final save.
    pub fn close(self) {
        self.persistence.save(&self.slip);
        info!("Bet slip session closed");
    }

    fn apply_if_some(&mut self, change: Option<SlipChange>) -> bool {
        match change {
            Some(change) => {
                self.apply(change);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, change: SlipChange) {
        self.machine.dismiss_result();
        self.persistence.save(&self.slip);
        self.emit(&change);
    }

    fn emit(&self, change: &SlipChange) {
        let event = match change {
            SlipChange::Added {
                selection,
                replaced,
            } => Event::SelectionAdded(SelectionEvent {
                replaced: replaced.as_ref().map(|r| r.id().to_string()),
                ..SelectionEvent::from(selection)
            }),
            SlipChange::Removed(selection) => {
                Event::SelectionRemoved(SelectionEvent::from(selection))
            }
            SlipChange::Cleared { removed } => Event::SlipCleared {
                item_count: *removed,
            },
            SlipChange::StakeChanged { .. } => return,
        };
        self.notifiers.notify_all(event);
    }
}
