//! In-memory slip store.

use parking_lot::Mutex;

use crate::domain::PersistedSlip;
use crate::error::Result;
use crate::port::SlipStore;

/// Keeps the slip in process memory; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    slip: Mutex<Option<PersistedSlip>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlipStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedSlip>> {
        Ok(self.slip.lock().clone())
    }

    fn save(&self, slip: &PersistedSlip) -> Result<()> {
        *self.slip.lock() = Some(slip.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_until_saved() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let slip = PersistedSlip {
            stake: dec!(3),
            ..Default::default()
        };
        store.save(&slip).unwrap();
        assert_eq!(store.load().unwrap(), Some(slip));
    }
}
