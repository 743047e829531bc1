//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions rather
//! than construction boilerplate.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{BookmakerKey, MarketKey, Outcome, Slip, SportEvent};

/// An upcoming soccer event `"{id}-home" vs "{id}-away"`.
pub fn event(id: &str) -> SportEvent {
    let kickoff = Utc
        .with_ymd_and_hms(2030, 5, 18, 15, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    SportEvent::new(id, "soccer_epl", kickoff, format!("{id}-home"), format!("{id}-away"))
        .with_sport_title("EPL")
}

/// An outcome with the given name and price.
pub fn outcome(name: &str, price: Decimal) -> Outcome {
    Outcome::new(name, price)
}

/// The `h2h` market key.
pub fn h2h() -> MarketKey {
    MarketKey::new("h2h")
}

/// The `unibet` bookmaker key.
pub fn bookmaker() -> BookmakerKey {
    BookmakerKey::new("unibet")
}

/// A slip holding one `h2h` "Home" selection per price, on events `e0..`.
pub fn slip_with_prices(prices: &[Decimal], stake: Decimal) -> Slip {
    let mut slip = Slip::new();
    for (i, price) in prices.iter().enumerate() {
        slip.add_selection(
            event(&format!("e{i}")),
            h2h(),
            outcome("Home", *price),
            bookmaker(),
        );
    }
    slip.set_stake(stake);
    slip
}
