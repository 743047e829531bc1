//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points around the slip. Adapters implement
//! them to integrate with external systems.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │     BetSlipSession      │
//!     ┌──────────────┤     Domain + Port       ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Slip   │            │    Bet      │              │ Notifier  │
//! │  Store  │            │  Submitter  │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SlipStore`] - Durable medium for the slip
//! - [`BetSubmitter`] - Bet placement backend
//! - [`Notifier`] - Activity notifications (analytics, logging)

mod notifier;
mod store;
mod submitter;

pub use notifier::{
    Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier, SelectionEvent, SubmissionEvent,
    SubmissionResultEvent,
};
pub use store::SlipStore;
pub use submitter::BetSubmitter;
