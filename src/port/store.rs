//! Store port for the durable slip medium.

use crate::domain::PersistedSlip;
use crate::error::Result;

/// Storage for the single persisted slip record.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `load` returns `Ok(None)` when nothing has been saved yet
/// - Errors are reported, never swallowed; the caller decides how to degrade
pub trait SlipStore: Send + Sync {
    /// Load the saved slip, if any.
    fn load(&self) -> Result<Option<PersistedSlip>>;

    /// Save the slip, replacing any previous record.
    fn save(&self, slip: &PersistedSlip) -> Result<()>;
}
