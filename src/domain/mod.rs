//! Bet-slip domain logic: pure types and rules, no I/O.

mod bet;
mod event;
mod id;
mod money;
mod selection;
mod slip;
mod submission;
mod toggle;

pub mod error;
pub mod payout;

pub use bet::{BetRecord, BetStatus, BetTicket};
pub use event::{Bookmaker, Market, Outcome, SportEvent};
pub use id::{BetId, BookmakerKey, EventId, MarketKey, SelectionId, UserId};
pub use money::{format_money, round_money, Amount, Price, Stake, DISPLAY_DP};
pub use selection::Selection;
pub use slip::{PersistedSlip, Slip, SlipChange};
pub use submission::{SubmissionMachine, SubmissionResult, SubmissionState};
pub use toggle::{select_or_deselect, SelectionAction};
