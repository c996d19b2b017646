//! Offline stand-in for the enhancement service.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use super::{ClientError, ProcessingClient};
use crate::models::{MediaType, ProcessingResult};
use crate::utils::artifact_filename;

/// Simulated delay for image enhancement.
const IMAGE_DELAY: Duration = Duration::from_secs(2);
/// Simulated delay for video/file uploads.
const FILE_DELAY: Duration = Duration::from_secs(3);

/// Demo video returned for every mock video request.
const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Simulates the remote service: waits a fixed delay, then always succeeds
/// with a synthetic placeholder URL. `fetch_artifact` fabricates a local
/// placeholder file so flows complete end to end without a network.
pub struct MockClient {
    artifact_dir: PathBuf,
    image_delay: Duration,
    file_delay: Duration,
}

impl MockClient {
    pub fn new(artifact_dir: impl Into<PathBuf>) -> Self {
        Self { artifact_dir: artifact_dir.into(), image_delay: IMAGE_DELAY, file_delay: FILE_DELAY }
    }

    /// Use one delay for both call types (configuration override and tests).
    pub fn with_delay(artifact_dir: impl Into<PathBuf>, delay: Duration) -> Self {
        Self { artifact_dir: artifact_dir.into(), image_delay: delay, file_delay: delay }
    }
}

impl ProcessingClient for MockClient {
    fn process(
        &self,
        _media: &Path,
        kind: MediaType,
        _mode: &str,
    ) -> Result<ProcessingResult, ClientError> {
        let delay = match kind {
            MediaType::Image => self.image_delay,
            MediaType::Video => self.file_delay,
        };
        thread::sleep(delay);

        let result = match kind {
            MediaType::Image => ProcessingResult {
                processed_url: format!(
                    "https://picsum.photos/800/600?random={}",
                    Utc::now().timestamp_millis()
                ),
                processing_time: delay.as_secs_f64(),
                file_type: None,
                enhancement: Some("brightness_contrast".to_string()),
            },
            MediaType::Video => ProcessingResult {
                processed_url: SAMPLE_VIDEO_URL.to_string(),
                processing_time: delay.as_secs_f64(),
                file_type: Some(MediaType::Video),
                enhancement: None,
            },
        };

        debug!(kind = %kind, url = %result.processed_url, "mock processing complete");
        Ok(result)
    }

    fn fetch_artifact(&self, remote_url: &str) -> Result<PathBuf, ClientError> {
        fs::create_dir_all(&self.artifact_dir)
            .map_err(|e| ClientError::Download(e.to_string()))?;

        let path = self.artifact_dir.join(artifact_filename(remote_url));
        // Placeholder content: the URL the artifact would have come from
        fs::write(&path, remote_url.as_bytes())
            .map_err(|e| ClientError::Download(e.to_string()))?;

        debug!(path = %path.display(), "mock artifact written");
        Ok(path)
    }
}
