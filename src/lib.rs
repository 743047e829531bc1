//! Betslip - accumulator bet slip with combined odds and bet placement.
//!
//! A slip holds at most one selection per sporting event. Its total odds are
//! the product of the selection prices, and the potential payout is the
//! total odds times the stake. A confirmed slip is submitted as a single
//! accumulator bet.
//!
//! # Modules
//!
//! - [`domain`] - Events, selections, the slip and the submission state machine
//! - [`port`] - Traits for slip storage, bet submission and notifications
//! - [`adapter`] - JSON file and in-memory stores, simulated and ledger submitters
//! - [`app`] - Configuration and the persistent [`app::BetSlipSession`]
//! - [`cli`] - The `betslip` command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Builders and scripted fakes for integration tests
//!
//! # Example
//!
//! ```
//! use betslip::domain::{BookmakerKey, MarketKey, Outcome, Slip, SportEvent};
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//!
//! let mut slip = Slip::new();
//! let event = SportEvent::new("e1", "soccer_epl", Utc::now(), "Arsenal", "Chelsea");
//! slip.add_selection(
//!     event,
//!     MarketKey::new("h2h"),
//!     Outcome::new("Arsenal", dec!(2.00)),
//!     BookmakerKey::new("unibet"),
//! );
//! slip.set_stake(dec!(25));
//! assert_eq!(slip.potential_payout(), dec!(50));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
