//! End-to-end enhancement flow: process, fetch, then (optionally) record.
//!
//! This is the orchestration the screen controllers share: one
//! user-triggered action runs its steps strictly in order, and the history
//! is only touched after both remote steps have succeeded, so no partial or
//! incomplete record is ever persisted. A failure anywhere leaves the
//! repository exactly as it was, letting the user retry the whole action.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::client::{ClientError, ProcessingClient};
use crate::history::{HistoryRepository, KeyValueStore, StorageError};
use crate::models::{HistoryRecord, MediaSource, MediaType, NewRecord, ProcessingResult};

/// One user-triggered enhancement action.
#[derive(Debug, Clone)]
pub struct EnhanceRequest {
    /// Locally-resolvable reference to the media to process.
    pub media: PathBuf,
    pub kind: MediaType,
    pub source: MediaSource,
    /// Free-form transformation label passed through to the service.
    pub mode: String,
    /// Whether the user confirmed recording the result in history.
    pub save: bool,
}

/// What a completed flow produced.
#[derive(Debug)]
pub struct EnhanceOutcome {
    pub result: ProcessingResult,
    /// Local path of the downloaded artifact.
    pub artifact: PathBuf,
    /// The appended record, present only when the request asked to save.
    pub record: Option<HistoryRecord>,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Run process → fetch → append for one request.
///
/// # Errors
///
/// Returns [`FlowError::Client`] if processing or the artifact transfer
/// fails (history untouched), or [`FlowError::Storage`] if the final append
/// fails (artifact already on disk, nothing recorded).
pub fn enhance<S: KeyValueStore>(
    client: &dyn ProcessingClient,
    repo: &HistoryRepository<S>,
    request: &EnhanceRequest,
) -> Result<EnhanceOutcome, FlowError> {
    let result = client.process(&request.media, request.kind, &request.mode)?;
    let artifact = client.fetch_artifact(&result.processed_url)?;

    let record = if request.save {
        Some(repo.append(NewRecord {
            kind: request.kind,
            source: request.source,
            original_uri: request.media.display().to_string(),
            processed_uri: artifact.display().to_string(),
        })?)
    } else {
        None
    };

    info!(
        kind = %request.kind,
        source = %request.source,
        artifact = %artifact.display(),
        recorded = record.is_some(),
        "enhancement flow complete"
    );

    Ok(EnhanceOutcome { result, artifact, record })
}
