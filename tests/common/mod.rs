//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use refiner::history::{FileStore, HISTORY_KEY, HistoryRepository};
use refiner::models::{MediaSource, MediaType, NewRecord};

/// Builder for append inputs with sensible defaults
pub struct RecordBuilder {
    kind: MediaType,
    source: MediaSource,
    original_uri: String,
    processed_uri: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            kind: MediaType::Image,
            source: MediaSource::Camera,
            original_uri: "file:///tmp/original.jpg".to_string(),
            processed_uri: "file:///tmp/processed.jpg".to_string(),
        }
    }

    pub fn video(mut self) -> Self {
        self.kind = MediaType::Video;
        self
    }

    pub fn gallery(mut self) -> Self {
        self.source = MediaSource::Gallery;
        self
    }

    pub fn original(mut self, uri: &str) -> Self {
        self.original_uri = uri.to_string();
        self
    }

    pub fn processed(mut self, uri: &str) -> Self {
        self.processed_uri = uri.to_string();
        self
    }

    pub fn build(self) -> NewRecord {
        NewRecord {
            kind: self.kind,
            source: self.source,
            original_uri: self.original_uri,
            processed_uri: self.processed_uri,
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Temp-dir backed data directory with a file-store repository
pub struct DataDir {
    temp_dir: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn repository(&self) -> HistoryRepository<FileStore> {
        HistoryRepository::new(FileStore::new(self.temp_dir.path()))
    }

    /// Path of the file backing the history key
    pub fn history_file(&self) -> PathBuf {
        FileStore::new(self.temp_dir.path()).key_path(HISTORY_KEY)
    }

    /// Overwrite the persisted history with unparsable bytes
    pub fn corrupt_history(&self) {
        fs::write(self.history_file(), b"\xff\xfe{not json at all")
            .expect("Failed to corrupt history file");
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
