//! Stake parsing and potential payout.
//!
//! Kept free of any slip state so the rules can be reused wherever a stake
//! is typed in.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::{Amount, Price, Stake};

/// Potential payout for a stake at the given aggregate odds.
///
/// `None` when the product does not fit in a `Decimal`.
#[must_use]
pub fn payout(total_odds: Price, stake: Stake) -> Option<Amount> {
    total_odds.checked_mul(stake)
}

/// Product of the prices, 1 for none. `None` on overflow.
#[must_use]
pub fn aggregate_odds(prices: impl IntoIterator<Item = Price>) -> Option<Price> {
    prices
        .into_iter()
        .try_fold(Decimal::ONE, |acc, price| acc.checked_mul(price))
}

/// Payout for raw form input.
///
/// Input that is unparseable, negative or too large to price yields zero.
#[must_use]
pub fn payout_for_input(total_odds: Price, input: &str) -> Amount {
    parse_stake(input)
        .and_then(|stake| payout(total_odds, stake))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a stake typed into a form field.
///
/// The empty string is the unset stake and parses as zero. Returns `None`
/// for anything that is not a non-negative number.
#[must_use]
pub fn parse_stake(input: &str) -> Option<Stake> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .ok()
        .and_then(validate_stake)
}

/// Convert a floating point stake; NaN, infinities and negatives are rejected.
#[must_use]
pub fn stake_from_f64(value: f64) -> Option<Stake> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).and_then(validate_stake)
}

/// Accept only non-negative stakes.
#[must_use]
pub fn validate_stake(stake: Stake) -> Option<Stake> {
    if stake.is_sign_negative() && !stake.is_zero() {
        None
    } else {
        Some(stake)
    }
}
