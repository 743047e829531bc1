//! The bet slip: selections keyed by event plus stake and derived payout.
//!
//! Every mutation recomputes the aggregate odds from scratch and returns a
//! [`SlipChange`] describing what happened, so callers can persist and
//! notify without the slip knowing about either. A mutation that is
//! rejected returns `None` and leaves the slip untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payout::{aggregate_odds, parse_stake, payout, stake_from_f64, validate_stake};
use super::{
    Amount, BookmakerKey, EventId, MarketKey, Outcome, Price, Selection, SelectionId, SportEvent,
    Stake,
};

/// A mutation that was applied to the slip.
#[derive(Debug, Clone, PartialEq)]
pub enum SlipChange {
    /// A selection was appended, or replaced the one for the same event.
    Added {
        selection: Selection,
        replaced: Option<Selection>,
    },
    /// A selection was removed by ID.
    Removed(Selection),
    /// All selections were dropped.
    Cleared { removed: usize },
    /// The stake was updated.
    StakeChanged { stake: Stake },
}

/// Accumulator slip holding at most one selection per event.
#[derive(Debug, Clone, PartialEq)]
pub struct Slip {
    selections: Vec<Selection>,
    total_odds: Price,
    stake: Stake,
    potential_payout: Amount,
}

impl Default for Slip {
    fn default() -> Self {
        Self::new()
    }
}

impl Slip {
    /// Empty slip: odds 1.0, stake 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
            total_odds: Decimal::ONE,
            stake: Decimal::ZERO,
            potential_payout: Decimal::ZERO,
        }
    }

    /// Rebuild a slip from stored parts.
    ///
    /// Derived values are recomputed, duplicate events collapse to the last
    /// selection seen, and a negative stake resets to zero. A stake whose
    /// payout cannot be priced resets to zero; legs whose odds cannot be
    /// priced give an empty slip.
    #[must_use]
    pub fn restore(selections: Vec<Selection>, stake: Stake) -> Self {
        let mut legs: Vec<Selection> = Vec::with_capacity(selections.len());
        for selection in selections {
            legs.retain(|s| s.event_id() != selection.event_id());
            legs.push(selection);
        }
        let stake = validate_stake(stake).unwrap_or(Decimal::ZERO);

        let Some(total_odds) = aggregate_odds(legs.iter().map(Selection::price)) else {
            return Self::new();
        };
        let (stake, potential_payout) = match payout(total_odds, stake) {
            Some(amount) => (stake, amount),
            None => (Decimal::ZERO, Decimal::ZERO),
        };
        Self {
            selections: legs,
            total_odds,
            stake,
            potential_payout,
        }
    }

    /// Selections in insertion order.
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Product of all selection prices, 1.0 when empty.
    #[must_use]
    pub fn total_odds(&self) -> Price {
        self.total_odds
    }

    #[must_use]
    pub fn stake(&self) -> Stake {
        self.stake
    }

    /// Aggregate odds times stake.
    #[must_use]
    pub fn potential_payout(&self) -> Amount {
        self.potential_payout
    }

    /// The selection currently held for an event, if any.
    #[must_use]
    pub fn selection_for_event(&self, event_id: &EventId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.event_id() == event_id)
    }

    #[must_use]
    pub fn get(&self, id: &SelectionId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.id() == id)
    }

    /// True if the slip holds exactly this market/outcome for the event.
    #[must_use]
    pub fn is_selected(&self, event_id: &EventId, market: &MarketKey, outcome_name: &str) -> bool {
        self.selection_for_event(event_id)
            .is_some_and(|s| s.matches(market, outcome_name))
    }

    /// Add a selection, replacing any existing one for the same event in place.
    ///
    /// `None` if the resulting odds or payout cannot be priced; the slip is
    /// then left unchanged.
    pub fn add_selection(
        &mut self,
        event: SportEvent,
        market: MarketKey,
        outcome: Outcome,
        bookmaker: BookmakerKey,
    ) -> Option<SlipChange> {
        self.insert(Selection::new(event, market, outcome, bookmaker))
    }

    /// Insert a prepared selection with the same replace-by-event rule.
    pub fn insert(&mut self, selection: Selection) -> Option<SlipChange> {
        let mut legs = self.selections.clone();
        let replaced = match legs.iter().position(|s| s.event_id() == selection.event_id()) {
            Some(index) => Some(std::mem::replace(&mut legs[index], selection.clone())),
            None => {
                legs.push(selection.clone());
                None
            }
        };

        self.commit(legs)?;
        Some(SlipChange::Added {
            selection,
            replaced,
        })
    }

    /// Remove a selection by ID.
    ///
    /// `None` if it was not on the slip, or if the remaining legs cannot be
    /// priced (only possible with prices below 1).
    pub fn remove_selection(&mut self, id: &SelectionId) -> Option<SlipChange> {
        let index = self.selections.iter().position(|s| s.id() == id)?;
        let mut legs = self.selections.clone();
        let removed = legs.remove(index);
        self.commit(legs)?;
        Some(SlipChange::Removed(removed))
    }

    /// Drop every selection: odds 1, payout 0. The stake is kept.
    pub fn clear(&mut self) -> SlipChange {
        let removed = self.selections.len();
        self.selections.clear();
        self.total_odds = Decimal::ONE;
        self.potential_payout = Decimal::ZERO;
        SlipChange::Cleared { removed }
    }

    /// Set the stake.
    ///
    /// Negative amounts, and amounts whose payout cannot be priced, are
    /// rejected and leave the slip unchanged.
    pub fn set_stake(&mut self, amount: Stake) -> Option<SlipChange> {
        let stake = validate_stake(amount)?;
        self.potential_payout = payout(self.total_odds, stake)?;
        self.stake = stake;
        Some(SlipChange::StakeChanged { stake })
    }

    /// Set the stake from form input; the empty string resets it to zero.
    pub fn set_stake_input(&mut self, input: &str) -> Option<SlipChange> {
        self.set_stake(parse_stake(input)?)
    }

    /// Set the stake from a float; NaN and infinities are rejected.
    pub fn set_stake_f64(&mut self, amount: f64) -> Option<SlipChange> {
        self.set_stake(stake_from_f64(amount)?)
    }

    /// Price `legs` against the current stake and adopt them, or change nothing.
    fn commit(&mut self, legs: Vec<Selection>) -> Option<()> {
        let total_odds = aggregate_odds(legs.iter().map(Selection::price))?;
        let potential_payout = payout(total_odds, self.stake)?;
        self.selections = legs;
        self.total_odds = total_odds;
        self.potential_payout = potential_payout;
        Some(())
    }
}

/// Serialized form of a [`Slip`].
///
/// Unknown fields are ignored and missing ones defaulted so older or newer
/// payloads still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSlip {
    pub selections: Vec<Selection>,
    pub total_odds: Price,
    pub stake: Stake,
    pub potential_payout: Amount,
}

impl Default for PersistedSlip {
    fn default() -> Self {
        Self::from(&Slip::new())
    }
}

impl From<&Slip> for PersistedSlip {
    fn from(slip: &Slip) -> Self {
        Self {
            selections: slip.selections.clone(),
            total_odds: slip.total_odds,
            stake: slip.stake,
            potential_payout: slip.potential_payout,
        }
    }
}

impl From<PersistedSlip> for Slip {
    fn from(persisted: PersistedSlip) -> Self {
        // a cleared slip was saved with no legs and a zero payout; keep it cleared
        let cleared = persisted.selections.is_empty() && persisted.potential_payout.is_zero();
        let mut slip = Slip::restore(persisted.selections, persisted.stake);
        if cleared {
            slip.potential_payout = Decimal::ZERO;
        }
        slip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn event(id: &str) -> SportEvent {
        SportEvent::new(id, "soccer_epl", Utc::now(), "Home", "Away")
    }

    fn add(slip: &mut Slip, event_id: &str, outcome: &str, price: Decimal) -> Selection {
        match slip.add_selection(
            event(event_id),
            MarketKey::new("h2h"),
            Outcome::new(outcome, price),
            BookmakerKey::new("unibet"),
        ) {
            Some(SlipChange::Added { selection, .. }) => selection,
            other => panic!("unexpected change {other:?}"),
        }
    }

    #[test]
    fn new_slip_defaults() {
        let slip = Slip::new();
        assert!(slip.is_empty());
        assert_eq!(slip.total_odds(), Decimal::ONE);
        assert_eq!(slip.stake(), Decimal::ZERO);
        assert_eq!(slip.potential_payout(), Decimal::ZERO);
    }

    #[test]
    fn total_odds_is_product_of_prices() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        add(&mut slip, "e2", "Home", dec!(1.50));
        add(&mut slip, "e3", "Away", dec!(3.00));
        slip.set_stake(dec!(10));

        assert_eq!(slip.total_odds(), dec!(9.00));
        assert_eq!(slip.potential_payout(), dec!(90.00));
    }

    #[test]
    fn second_selection_for_event_replaces_first_in_place() {
        let mut slip = Slip::new();
        let first = add(&mut slip, "e1", "Home", dec!(2.00));
        add(&mut slip, "e2", "Home", dec!(1.80));

        let change = slip.add_selection(
            event("e1"),
            MarketKey::new("totals"),
            Outcome::new("Over", dec!(1.90)),
            BookmakerKey::new("unibet"),
        );

        match change {
            Some(SlipChange::Added { replaced, .. }) => {
                assert_eq!(replaced.unwrap().id(), first.id());
            }
            other => panic!("unexpected change {other:?}"),
        }
        assert_eq!(slip.len(), 2);
        let held = slip.selection_for_event(&EventId::new("e1")).unwrap();
        assert_eq!(held.market().as_str(), "totals");
        assert_eq!(held.outcome().name, "Over");
        // insertion position is kept
        assert_eq!(slip.selections()[0].event_id().as_str(), "e1");
        assert_eq!(slip.total_odds(), dec!(3.42));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        slip.set_stake(dec!(5));
        let before = slip.clone();

        assert!(slip.remove_selection(&SelectionId::from("missing")).is_none());
        assert_eq!(slip, before);
    }

    #[test]
    fn removing_last_selection_resets_odds() {
        let mut slip = Slip::new();
        let s = add(&mut slip, "e1", "Home", dec!(2.00));
        slip.set_stake(dec!(5));

        assert!(slip.remove_selection(s.id()).is_some());
        assert_eq!(slip.total_odds(), Decimal::ONE);
        // odds 1 x stake 5; only clear() zeroes the payout
        assert_eq!(slip.potential_payout(), dec!(5));
    }

    #[test]
    fn stake_on_empty_slip_pays_at_unit_odds() {
        let mut slip = Slip::new();
        slip.set_stake(dec!(25));
        assert_eq!(slip.potential_payout(), dec!(25));
    }

    #[test]
    fn stake_too_large_to_price_is_rejected() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2));
        slip.set_stake(dec!(10));
        let before = slip.clone();

        let huge = parse_stake("79228162514264337593543950335").unwrap();
        assert!(slip.set_stake(huge).is_none());
        assert_eq!(slip, before);
    }

    #[test]
    fn leg_that_overflows_odds_is_rejected() {
        let mut slip = Slip::new();
        for i in 0..9 {
            add(&mut slip, &format!("e{i}"), "Home", dec!(1000));
        }
        let before = slip.clone();

        let change = slip.add_selection(
            event("e9"),
            MarketKey::new("h2h"),
            Outcome::new("Home", dec!(1000)),
            BookmakerKey::new("unibet"),
        );
        assert!(change.is_none());
        assert_eq!(slip, before);
        assert_eq!(slip.len(), 9);
    }

    #[test]
    fn restore_survives_unpriceable_payloads() {
        let mut legs = Slip::new();
        for i in 0..9 {
            add(&mut legs, &format!("e{i}"), "Home", dec!(1000));
        }
        let mut selections = legs.selections().to_vec();

        // odds of 1e27 fit, times 1000 they do not: stake drops to zero
        let restored = Slip::restore(selections.clone(), dec!(1000));
        assert_eq!(restored.len(), 9);
        assert_eq!(restored.stake(), Decimal::ZERO);
        assert_eq!(restored.potential_payout(), Decimal::ZERO);

        // odds themselves overflow: start empty
        let mut extra = Slip::new();
        selections.push(add(&mut extra, "e9", "Home", dec!(1000)));
        let restored = Slip::restore(selections, dec!(5));
        assert_eq!(restored, Slip::new());
    }

    #[test]
    fn cleared_slip_reloads_with_zero_payout() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        slip.set_stake(dec!(5));
        slip.clear();

        let reloaded = Slip::from(PersistedSlip::from(&slip));
        assert_eq!(reloaded.stake(), dec!(5));
        assert_eq!(reloaded.potential_payout(), Decimal::ZERO);
    }

    #[test]
    fn clear_resets_odds_and_payout() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        add(&mut slip, "e2", "Home", dec!(2.00));
        slip.set_stake(dec!(5));

        assert_eq!(slip.clear(), SlipChange::Cleared { removed: 2 });
        assert!(slip.is_empty());
        assert_eq!(slip.total_odds(), Decimal::ONE);
        assert_eq!(slip.potential_payout(), Decimal::ZERO);
    }

    #[test]
    fn invalid_stake_leaves_slip_unchanged() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        slip.set_stake(dec!(7));
        let before = slip.clone();

        assert!(slip.set_stake(dec!(-5)).is_none());
        assert!(slip.set_stake_f64(f64::NAN).is_none());
        assert!(slip.set_stake_input("abc").is_none());
        assert_eq!(slip, before);
    }

    #[test]
    fn empty_stake_input_unsets_stake() {
        let mut slip = Slip::new();
        slip.set_stake(dec!(7));
        assert!(slip.set_stake_input("").is_some());
        assert_eq!(slip.stake(), Decimal::ZERO);
    }

    #[test]
    fn is_selected_checks_market_and_outcome() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        let id = EventId::new("e1");
        assert!(slip.is_selected(&id, &MarketKey::new("h2h"), "Home"));
        assert!(!slip.is_selected(&id, &MarketKey::new("h2h"), "Away"));
    }

    #[test]
    fn restore_recomputes_and_dedupes() {
        let mut slip = Slip::new();
        add(&mut slip, "e1", "Home", dec!(2.00));
        add(&mut slip, "e2", "Home", dec!(1.80));
        let mut selections = slip.selections().to_vec();
        let mut other = Slip::new();
        selections.push(add(&mut other, "e1", "Away", dec!(4.00)));

        let restored = Slip::restore(selections, dec!(-3));
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.stake(), Decimal::ZERO);
        assert_eq!(restored.total_odds(), dec!(7.20));
        assert_eq!(
            restored
                .selection_for_event(&EventId::new("e1"))
                .unwrap()
                .outcome()
                .name,
            "Away"
        );
    }

    #[test]
    fn persisted_slip_ignores_unknown_and_defaults_missing_fields() {
        let json = r#"{ "stake": "12", "theme": "dark" }"#;
        let persisted: PersistedSlip = serde_json::from_str(json).unwrap();
        let slip = Slip::from(persisted);
        assert!(slip.is_empty());
        assert_eq!(slip.stake(), dec!(12));
        assert_eq!(slip.total_odds(), Decimal::ONE);
    }
}
