//! History storage seam.
//!
//! The engine's only contract with persistence: save finished-game
//! records, list them newest first. The in-memory implementation backs
//! tests and embedding callers that bring their own durability.

use rustc_hash::FxHashMap;
use thiserror::Error;
use uuid::Uuid;

use super::record::GameRecord;

/// Why a record could not be stored.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A record with the same id is already stored.
    #[error("record {0} already exists")]
    DuplicateRecord(Uuid),
}

/// Storage contract for finished games.
pub trait HistoryStore {
    /// Store a record. Ids are unique; storing the same id twice is an
    /// error.
    fn save(&mut self, record: GameRecord) -> Result<(), HistoryError>;

    /// All stored records, newest first.
    fn recent(&self) -> Vec<GameRecord>;
}

/// In-memory history store keyed by record id.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    records: FxHashMap<Uuid, GameRecord>,
}

impl MemoryHistoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        if self.records.contains_key(&record.id) {
            return Err(HistoryError::DuplicateRecord(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    fn recent(&self) -> Vec<GameRecord> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }
}
