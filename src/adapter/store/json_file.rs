//! JSON file slip store.
//!
//! Writes the slip as a single pretty-printed JSON document using
//! write-to-temp-then-rename so a crash never leaves a torn file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::PersistedSlip;
use crate::error::Result;
use crate::port::SlipStore;

/// Slip store backed by one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlipStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedSlip>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let slip = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "Slip loaded");
        Ok(Some(slip))
    }

    fn save(&self, slip: &PersistedSlip) -> Result<()> {
        let json = serde_json::to_string_pretty(slip)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), "Slip saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookmakerKey, MarketKey, Outcome, Slip, SportEvent};
    use crate::error::Error;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slip.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slip.json");
        let store = JsonFileStore::new(&path);

        let mut slip = Slip::new();
        slip.add_selection(
            SportEvent::new("e1", "soccer_epl", Utc::now(), "Home", "Away"),
            MarketKey::new("h2h"),
            Outcome::new("Home", dec!(2.25)),
            BookmakerKey::new("unibet"),
        );
        slip.set_stake(dec!(8));
        let persisted = PersistedSlip::from(&slip);

        store.save(&persisted).unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(store.load().unwrap(), Some(persisted));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slip.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }
}
