//! Bet submission adapters.
//!
//! Implements the `port::BetSubmitter` trait.

mod ledger;
mod simulated;

pub use ledger::LedgerSubmitter;
pub use simulated::{SimulatedSubmitter, SIMULATED_FAILURE};
