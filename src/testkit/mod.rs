//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for events, outcomes and ready-made slips.
//! - [`notifier`] - `RecordingNotifier`, which keeps every event it receives.
//! - [`submitter`] - `ScriptedSubmitter`, which answers from a queue.

pub mod domain;
pub mod notifier;
pub mod submitter;
