//! A single chosen outcome for one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookmakerKey, EventId, MarketKey, Outcome, Price, SelectionId, SportEvent};

/// One leg of the accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    id: SelectionId,
    event: SportEvent,
    market: MarketKey,
    outcome: Outcome,
    bookmaker: BookmakerKey,
    added_at: DateTime<Utc>,
}

impl Selection {
    /// Create a selection with a fresh ID, stamped now.
    #[must_use]
    pub fn new(
        event: SportEvent,
        market: MarketKey,
        outcome: Outcome,
        bookmaker: BookmakerKey,
    ) -> Self {
        Self {
            id: SelectionId::new(),
            event,
            market,
            outcome,
            bookmaker,
            added_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SelectionId {
        &self.id
    }

    #[must_use]
    pub fn event(&self) -> &SportEvent {
        &self.event
    }

    #[must_use]
    pub fn event_id(&self) -> &EventId {
        &self.event.id
    }

    #[must_use]
    pub fn market(&self) -> &MarketKey {
        &self.market
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub fn bookmaker(&self) -> &BookmakerKey {
        &self.bookmaker
    }

    #[must_use]
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Price of the chosen outcome.
    #[must_use]
    pub fn price(&self) -> Price {
        self.outcome.price
    }

    /// True if this selection is the given market/outcome pair.
    #[must_use]
    pub fn matches(&self, market: &MarketKey, outcome_name: &str) -> bool {
        &self.market == market && self.outcome.name == outcome_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn selection() -> Selection {
        Selection::new(
            SportEvent::new("e1", "soccer_epl", Utc::now(), "Arsenal", "Chelsea"),
            MarketKey::new("h2h"),
            Outcome::new("Arsenal", dec!(2.10)),
            BookmakerKey::new("unibet"),
        )
    }

    #[test]
    fn accessors() {
        let s = selection();
        assert_eq!(s.event_id().as_str(), "e1");
        assert_eq!(s.market().as_str(), "h2h");
        assert_eq!(s.price(), dec!(2.10));
        assert_eq!(s.bookmaker().as_str(), "unibet");
    }

    #[test]
    fn matches_market_and_outcome() {
        let s = selection();
        assert!(s.matches(&MarketKey::new("h2h"), "Arsenal"));
        assert!(!s.matches(&MarketKey::new("h2h"), "Draw"));
        assert!(!s.matches(&MarketKey::new("totals"), "Arsenal"));
    }

    #[test]
    fn timestamps_survive_json() {
        let s = selection();
        let json = serde_json::to_string(&s).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.added_at(), s.added_at());
        assert_eq!(back, s);
    }
}
