//! Durable snapshot slot for the record store.
//!
//! The desk persists as one opaque, namespaced slot holding the full record
//! collections in JSON. Saving is best-effort: the service logs and swallows
//! failures, and an absent or unreadable slot opens as an empty desk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{ContractRecord, Pim, Product, Requirement};

/// Serialized image of the full record store.
///
/// Each collection defaults to empty when absent from the stored document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub pims: Vec<Pim>,
    #[serde(default)]
    pub contracts: Vec<ContractRecord>,
}

/// Failures of the snapshot slot itself. The desk service never surfaces
/// these to callers.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A durable slot holding at most one snapshot.
pub trait SnapshotStore {
    /// Reads the slot. `Ok(None)` means the slot has never been written.
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Overwrites the slot with a full snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}

/// Snapshot slot backed by one JSON file, `<data_dir>/<namespace>.json`.
#[derive(Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(data_dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(snapshot)?)?;
        Ok(())
    }
}

/// Snapshot slot held in memory. Backs ephemeral desks and tests.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Mutex<Option<Snapshot>>,
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            products: vec![Product {
                code: "MP-1".into(),
                name: "Steel coil".into(),
                price: dec!(100),
                last_import: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            }],
            ..Snapshot::default()
        }
    }

    #[test]
    fn file_slot_round_trips_a_snapshot() {
        let dir = tempdir().unwrap();
        let slot = FileSnapshotStore::new(dir.path(), "comex-data");

        assert!(slot.load().unwrap().is_none());
        slot.save(&sample_snapshot()).unwrap();
        assert_eq!(slot.load().unwrap(), Some(sample_snapshot()));
    }

    #[test]
    fn file_slot_rejects_garbage() {
        let dir = tempdir().unwrap();
        let slot = FileSnapshotStore::new(dir.path(), "comex-data");
        fs::write(slot.path(), "not a snapshot {{").unwrap();

        assert!(matches!(
            slot.load(),
            Err(PersistenceError::Serialization(_))
        ));
    }

    #[test]
    fn file_slot_tolerates_missing_collections() {
        let dir = tempdir().unwrap();
        let slot = FileSnapshotStore::new(dir.path(), "comex-data");
        fs::write(slot.path(), r#"{"products": []}"#).unwrap();

        assert_eq!(slot.load().unwrap(), Some(Snapshot::default()));
    }

    #[test]
    fn file_slot_creates_its_parent_directory() {
        let dir = tempdir().unwrap();
        let slot = FileSnapshotStore::new(dir.path().join("nested/desk"), "comex-data");

        slot.save(&Snapshot::default()).unwrap();
        assert!(slot.path().exists());
    }

    #[test]
    fn in_memory_slot_round_trips_a_snapshot() {
        let slot = InMemorySnapshotStore::default();

        assert!(slot.load().unwrap().is_none());
        slot.save(&sample_snapshot()).unwrap();
        assert_eq!(slot.load().unwrap(), Some(sample_snapshot()));
    }
}
