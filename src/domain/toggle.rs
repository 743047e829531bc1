//! Default interaction policy for clicking an outcome.
//!
//! Clicking the outcome already held for an event deselects it; clicking any
//! other outcome adds it (replacing whatever the event held before).

use super::{EventId, MarketKey, SelectionId, Slip};

/// What a click on an outcome should do to the slip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Add,
    Remove(SelectionId),
}

/// Decide between add and remove for a clicked outcome.
#[must_use]
pub fn select_or_deselect(
    slip: &Slip,
    event_id: &EventId,
    market: &MarketKey,
    outcome_name: &str,
) -> SelectionAction {
    match slip.selection_for_event(event_id) {
        Some(existing) if existing.matches(market, outcome_name) => {
            SelectionAction::Remove(existing.id().clone())
        }
        _ => SelectionAction::Add,
    }
}
