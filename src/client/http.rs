//! Live HTTP implementation of the processing client.
//!
//! Talks to two multipart upload endpoints: `/api/process/image` for single
//! images (short timeout) and `/api/upload/file` for generic image/video
//! uploads (longer timeout). Every transport or non-success response maps to
//! a [`ClientError`] carrying a message fit for user-facing failure text.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, ProcessingClient};
use crate::models::{MediaType, ProcessingResult};
use crate::utils::artifact_filename;

/// Request timeout for single-image enhancement.
const IMAGE_TIMEOUT_SECS: u64 = 30;
/// Request timeout for bulk/video uploads and artifact downloads.
const FILE_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Wire shape shared by both processing endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessResponse {
    success: bool,
    #[serde(default)]
    processed_url: Option<String>,
    #[serde(default)]
    processing_time: f64,
    #[serde(default)]
    file_type: Option<MediaType>,
    #[serde(default)]
    enhancement: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract the error message from a JSON body `{"message": "..."}`, falling
/// back to the raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

pub struct HttpClient {
    base_url: String,
    artifact_dir: PathBuf,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client for the service at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: String, artifact_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| anyhow::anyhow!("could not build HTTP client: {e}"))?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), artifact_dir: artifact_dir.into(), http })
    }

    fn media_part(media: &Path, mime: &str, file_name: &str) -> Result<Part, ClientError> {
        let bytes = fs::read(media).map_err(|e| {
            ClientError::Processing(format!("could not read media file {}: {e}", media.display()))
        })?;
        Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ClientError::Processing(format!("invalid content type {mime}: {e}")))
    }
}

impl ProcessingClient for HttpClient {
    fn process(
        &self,
        media: &Path,
        kind: MediaType,
        mode: &str,
    ) -> Result<ProcessingResult, ClientError> {
        // Single images go to the enhancement endpoint with the mode label;
        // videos go to the generic file-upload endpoint with a longer timeout.
        let (url, form, timeout) = match kind {
            MediaType::Image => (
                format!("{}/api/process/image", self.base_url),
                Form::new()
                    .part("image", Self::media_part(media, "image/jpeg", "photo.jpg")?)
                    .part("filter", Part::text(mode.to_string())),
                Duration::from_secs(IMAGE_TIMEOUT_SECS),
            ),
            MediaType::Video => (
                format!("{}/api/upload/file", self.base_url),
                Form::new().part("file", Self::media_part(media, "video/mp4", "video.mp4")?),
                Duration::from_secs(FILE_TIMEOUT_SECS),
            ),
        };

        debug!(url = %url, kind = %kind, mode = %mode, "submitting media for processing");

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .map_err(|e| ClientError::Processing(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let message = extract_error_message(&body);
            if message.is_empty() {
                return Err(ClientError::Processing(format!("server returned HTTP {status}")));
            }
            return Err(ClientError::Processing(message));
        }

        let body: ProcessResponse = resp
            .json()
            .map_err(|e| ClientError::Processing(format!("invalid response from server: {e}")))?;

        if !body.success {
            return Err(ClientError::Processing(
                body.message.unwrap_or_else(|| "processing rejected by server".to_string()),
            ));
        }

        let processed_url = body
            .processed_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::Processing("server response missing processedUrl".to_string()))?;

        Ok(ProcessingResult {
            processed_url,
            processing_time: body.processing_time,
            file_type: body.file_type,
            enhancement: body.enhancement,
        })
    }

    fn fetch_artifact(&self, remote_url: &str) -> Result<PathBuf, ClientError> {
        debug!(url = %remote_url, "downloading processed artifact");

        let resp = self
            .http
            .get(remote_url)
            .timeout(Duration::from_secs(FILE_TIMEOUT_SECS))
            .send()
            .map_err(|e| ClientError::Download(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Download(format!("server returned HTTP {status}")));
        }

        let bytes = resp.bytes().map_err(|e| ClientError::Download(e.to_string()))?;

        fs::create_dir_all(&self.artifact_dir)
            .map_err(|e| ClientError::Download(e.to_string()))?;

        // Write atomically (temp file + rename) so a failed transfer never
        // leaves a half-written artifact behind
        let path = self.artifact_dir.join(artifact_filename(remote_url));
        let temp = path.with_extension("tmp");
        fs::write(&temp, &bytes).map_err(|e| ClientError::Download(e.to_string()))?;
        fs::rename(&temp, &path).map_err(|e| ClientError::Download(e.to_string()))?;

        debug!(path = %path.display(), size = bytes.len(), "artifact saved");
        Ok(path)
    }
}
