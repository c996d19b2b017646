//! The history repository: an ordered, durable log of processing records.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use super::store::KeyValueStore;
use crate::models::{HistoryRecord, NewRecord};

/// Fixed, versioned key owning the serialized record sequence. No other
/// component reads or writes this key.
pub const HISTORY_KEY: &str = "history-v1";

/// A history mutation that did not take effect.
///
/// Read failures are not represented here: unreadable or unparsable state is
/// absorbed by the fail-soft read path and reported as an empty log.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not persist history: {0}")]
    Write(#[source] std::io::Error),
    #[error("could not serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Maintains the durable log of [`HistoryRecord`]s on top of a
/// [`KeyValueStore`].
///
/// The sequence is kept newest-first at append time; `list` returns records
/// in stored order and never re-sorts. Read-modify-write operations are not
/// atomic against concurrent callers: the whole system is assumed to be a
/// single foreground writer acting sequentially, and two racing mutations
/// resolve as last-write-wins.
pub struct HistoryRepository<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a record from `new`, prepend it to the log, persist the whole
    /// sequence, and return the record.
    ///
    /// `id` and `timestamp` are assigned here. A v4 UUID makes an id
    /// collision a non-event within any realistic process lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated sequence cannot be serialized
    /// or written; the log is unchanged in that case.
    pub fn append(&self, new: NewRecord) -> Result<HistoryRecord, StorageError> {
        let record = HistoryRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind: new.kind,
            source: new.source,
            original_uri: new.original_uri,
            processed_uri: new.processed_uri,
        };

        let mut records = self.list();
        records.insert(0, record.clone());
        self.persist(&records)?;

        debug!(id = %record.id, kind = %record.kind, "history record appended");
        Ok(record)
    }

    /// Read the full log, newest first.
    ///
    /// Never fails the caller: a missing key, an unreadable store, or
    /// unparsable bytes all yield an empty sequence (logged at warn level).
    pub fn list(&self) -> Vec<HistoryRecord> {
        let bytes = match self.store.get(HISTORY_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "history read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "history is unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Remove the record with the given id, if present. Deleting an absent
    /// id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the filtered sequence cannot be persisted.
    pub fn delete_by_id(&self, id: &str) -> Result<(), StorageError> {
        let mut records = self.list();
        records.retain(|r| r.id != id);
        self.persist(&records)
    }

    /// Remove the entire log by deleting the history key outright, so a
    /// subsequent `list` sees an absent key rather than an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY).map_err(StorageError::Write)
    }

    fn persist(&self, records: &[HistoryRecord]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(records)?;
        self.store.set(HISTORY_KEY, &bytes).map_err(StorageError::Write)
    }
}
