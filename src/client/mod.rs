//! Remote processing client: submits media for enhancement and resolves the
//! processed artifact.
//!
//! Two implementations sit behind [`ProcessingClient`]: [`MockClient`]
//! simulates the service with a fixed delay and synthetic URLs, and
//! [`HttpClient`] performs the real multipart uploads. Which one runs is
//! decided once at startup from configuration ([`from_config`]); callers
//! hold a `Box<dyn ProcessingClient>` and never branch on the mode.

pub mod http;
pub mod mock;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

pub use http::HttpClient;
pub use mock::MockClient;

use crate::config::{AppConfig, ClientMode};
use crate::models::{MediaType, ProcessingResult};

/// A processing or transfer failure, carrying a human-readable cause that is
/// shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote service failed or timed out while processing the media.
    #[error("processing failed: {0}")]
    Processing(String),
    /// The processed artifact could not be transferred to local storage.
    #[error("download failed: {0}")]
    Download(String),
}

/// Contract of the enhancement service.
///
/// `process` and `fetch_artifact` are separate steps so a caller can show
/// distinct progress states (remote compute vs. local transfer) and so either
/// transport can change independently.
pub trait ProcessingClient {
    /// Submit one locally-resolvable media reference for processing.
    ///
    /// `mode` is a free-form label telling the service which transformation
    /// to apply; the client passes it through without validation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Processing`] on any transport failure, timeout,
    /// or non-success service response.
    fn process(
        &self,
        media: &Path,
        kind: MediaType,
        mode: &str,
    ) -> Result<ProcessingResult, ClientError>;

    /// Download the processed artifact to local durable storage under a
    /// freshly generated filename, returning the local path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Download`] if the transfer does not complete.
    fn fetch_artifact(&self, remote_url: &str) -> Result<PathBuf, ClientError>;
}

/// Build the client selected by the startup configuration.
///
/// Artifacts land in the configured artifact directory, defaulting to
/// `artifacts/` under the data directory.
pub fn from_config(config: &AppConfig, data_dir: &Path) -> Result<Box<dyn ProcessingClient>> {
    let artifact_dir =
        config.artifact_dir.clone().unwrap_or_else(|| data_dir.join("artifacts"));

    match config.mode {
        ClientMode::Mock => {
            let client = match config.mock_delay_ms {
                Some(ms) => MockClient::with_delay(artifact_dir, Duration::from_millis(ms)),
                None => MockClient::new(artifact_dir),
            };
            Ok(Box::new(client))
        }
        ClientMode::Live => {
            Ok(Box::new(HttpClient::new(config.api_base_url.clone(), artifact_dir)?))
        }
    }
}
