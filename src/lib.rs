//! Refiner - media enhancement client core
//!
//! This library implements the durable core of a media "enhancement" client:
//! a local, ordered history of completed processing operations and the
//! client that submits media to the remote service. It supports:
//!
//! - Appending, listing, deleting, and clearing history records over a
//!   key-value store adapter
//! - Submitting media for processing in mock mode (offline simulation) or
//!   live mode (multipart HTTP upload)
//! - Downloading processed artifacts to local storage
//! - Driving the full process → fetch → record flow with no partial commits
//!
//! # Example
//!
//! ```no_run
//! use refiner::history::{FileStore, HistoryRepository};
//!
//! let repo = HistoryRepository::new(FileStore::new("/tmp/refiner"));
//! for record in repo.list() {
//!     println!("{} {}", record.timestamp, record.processed_uri);
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod flow;
pub mod history;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::{ClientError, HttpClient, MockClient, ProcessingClient};
pub use config::{AppConfig, ClientMode};
pub use history::{FileStore, HistoryRepository, KeyValueStore, StorageError};
pub use models::{HistoryRecord, MediaSource, MediaType, NewRecord, ProcessingResult};
