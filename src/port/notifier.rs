//! Notifier port for slip activity.
//!
//! This module defines the trait for recording what happens to the slip:
//! selections added and removed, clears, and bet submissions. Delivery is
//! fire-and-forget and never affects slip state.

use std::panic::{self, AssertUnwindSafe};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{Selection, SubmissionResult};

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A selection was placed on the slip.
    SelectionAdded(SelectionEvent),
    /// A selection was taken off the slip.
    SelectionRemoved(SelectionEvent),
    /// The slip was emptied.
    SlipCleared {
        /// Number of selections dropped.
        item_count: usize,
    },
    /// The user confirmed and a bet is being submitted.
    SubmissionConfirmed(SubmissionEvent),
    /// The submission finished (success or failure).
    SubmissionCompleted(SubmissionResultEvent),
}

/// Identifying fields of a selection.
#[derive(Debug, Clone)]
pub struct SelectionEvent {
    pub event_id: String,
    pub sport_key: String,
    pub selection_id: String,
    pub market: String,
    pub selection: String,
    pub odds: Decimal,
    /// ID of the selection this one replaced, for an add on an event already held.
    pub replaced: Option<String>,
}

impl From<&Selection> for SelectionEvent {
    fn from(selection: &Selection) -> Self {
        Self {
            event_id: selection.event_id().to_string(),
            sport_key: selection.event().sport_key.clone(),
            selection_id: selection.id().to_string(),
            market: selection.market().to_string(),
            selection: selection.outcome().name.clone(),
            odds: selection.price(),
            replaced: None,
        }
    }
}

/// Snapshot summary of a confirmed bet.
#[derive(Debug, Clone)]
pub struct SubmissionEvent {
    pub event_ids: Vec<String>,
    pub total_odds: Decimal,
    pub stake: Decimal,
}

/// Result of a submission.
#[derive(Debug, Clone)]
pub struct SubmissionResultEvent {
    pub success: bool,
    pub bet_id: Option<String>,
    pub message: String,
}

impl From<&SubmissionResult> for SubmissionResultEvent {
    fn from(result: &SubmissionResult) -> Self {
        Self {
            success: result.success,
            bet_id: result.bet_id.as_ref().map(ToString::to_string),
            message: result.message.clone(),
        }
    }
}

/// Trait for notification handlers.
///
/// Implement this trait to receive slip events.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
/// - Consider spawning async tasks for slow operations
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    ///
    /// A notifier that panics is logged and skipped; the rest still run.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            let event = event.clone();
            if panic::catch_unwind(AssertUnwindSafe(|| notifier.notify(event))).is_err() {
                warn!("Notifier panicked, event dropped");
            }
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::SelectionAdded(e) => {
                info!(
                    event_id = %e.event_id,
                    market = %e.market,
                    selection = %e.selection,
                    odds = %e.odds,
                    replaced = ?e.replaced,
                    "Selection added"
                );
            }
            Event::SelectionRemoved(e) => {
                info!(
                    event_id = %e.event_id,
                    selection = %e.selection,
                    "Selection removed"
                );
            }
            Event::SlipCleared { item_count } => {
                info!(item_count, "Slip cleared");
            }
            Event::SubmissionConfirmed(e) => {
                info!(
                    selections = e.event_ids.len(),
                    total_odds = %e.total_odds,
                    stake = %e.stake,
                    "Bet confirmed"
                );
            }
            Event::SubmissionCompleted(e) => {
                info!(
                    success = e.success,
                    bet_id = ?e.bet_id,
                    message = %e.message,
                    "Bet submission completed"
                );
            }
        }
    }
}
