//! Submitter port for handing a confirmed bet to bet storage.

use async_trait::async_trait;

use crate::domain::{BetId, BetTicket};
use crate::error::SubmissionError;

/// External collaborator that places a bet.
///
/// # Implementation Notes
///
/// - Must resolve (success or failure) in finite time
/// - Business-rule rejections (empty slip, non-positive stake) are reported
///   as errors, the same as transport failures
#[async_trait]
pub trait BetSubmitter: Send + Sync {
    /// Submit a ticket and return the confirmation identifier.
    async fn submit(&self, ticket: &BetTicket) -> Result<BetId, SubmissionError>;

    /// Backend name for logging/debugging.
    fn name(&self) -> &'static str;
}
