//! Monetary types for price, stake and payout representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal odds multiplier.
pub type Price = Decimal;

/// Amount wagered.
pub type Stake = Decimal;

/// Monetary amount such as a potential payout.
pub type Amount = Decimal;

/// Decimal places used whenever odds or amounts are shown or compared.
pub const DISPLAY_DP: u32 = 2;

/// Round to two decimals, half away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a value with exactly two decimals, e.g. `90.00`.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    // round first: the `{:.2}` precision only pads
    format!("{:.2}", round_money(value))
}
