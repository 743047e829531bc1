//! Best-effort slip persistence.
//!
//! Store errors never reach the caller: a failed load yields the default
//! empty slip and a failed save is logged while the in-memory slip carries on.

use tracing::{debug, warn};

use crate::domain::{PersistedSlip, Slip};
use crate::port::SlipStore;

pub struct PersistenceAdapter {
    store: Box<dyn SlipStore>,
}

impl PersistenceAdapter {
    #[must_use]
    pub fn new(store: Box<dyn SlipStore>) -> Self {
        Self { store }
    }

    /// Restore the slip, or an empty one if nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Slip {
        match self.store.load() {
            Ok(Some(persisted)) => {
                let slip = Slip::from(persisted);
                debug!(selections = slip.len(), "Restored slip");
                slip
            }
            Ok(None) => Slip::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load slip, starting empty");
                Slip::new()
            }
        }
    }

    /// Save the slip; returns false if the write failed.
    pub fn save(&self, slip: &Slip) -> bool {
        match self.store.save(&PersistedSlip::from(slip)) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save slip");
                false
            }
        }
    }
}
