use crate::models::MediaType;

/// Outcome of a successful processing request.
///
/// A one-shot return value, never persisted. Failures are reported through
/// [`ClientError`](crate::client::ClientError) rather than a success flag, so
/// holding a `ProcessingResult` always means the remote step succeeded and
/// `processed_url` points at the artifact.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Remote URL of the processed artifact.
    pub processed_url: String,
    /// Server-reported processing time in seconds, diagnostic only.
    pub processing_time: f64,
    /// Optional media kind echoed back by the upload endpoint.
    pub file_type: Option<MediaType>,
    /// Optional label describing the transformation the service applied.
    pub enhancement: Option<String>,
}
