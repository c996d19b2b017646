//! Durable history log: a key-value store adapter plus the repository
//! that owns the serialized record sequence.
//!
//! The repository is the only component that touches the history key. It
//! keeps the sequence newest-first at write time, so reads never re-sort.
//! Reads fail soft (missing or unreadable state is an empty log); writes
//! fail loud so a caller always knows whether a mutation took effect.

pub mod repository;
pub mod store;

pub use repository::{HISTORY_KEY, HistoryRepository, StorageError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
