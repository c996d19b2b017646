//! Data models for the enhancement history and processing pipeline.
//!
//! This module defines the data structures shared across the crate:
//!
//! - [`HistoryRecord`] - One completed processing operation, as persisted
//! - [`NewRecord`] - The caller-supplied attributes of a record to append
//! - [`ProcessingResult`] - Transient outcome of a processing request
//! - [`MediaType`] / [`MediaSource`] - String enums tagging each record
//!
//! Persisted records serialize with serde using the camelCase field names
//! of the on-disk history format.

pub mod record;
pub mod result;

pub use record::{HistoryRecord, MediaSource, MediaType, NewRecord};
pub use result::ProcessingResult;
