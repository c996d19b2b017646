use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of media a record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the media item was acquired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaSource {
    Camera,
    Gallery,
}

impl MediaSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaSource::Camera => "camera",
            MediaSource::Gallery => "gallery",
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed processing operation.
///
/// Records are immutable after creation: the repository appends and deletes
/// them but never updates one in place. `id` and `timestamp` are assigned by
/// [`HistoryRepository::append`](crate::history::HistoryRepository::append);
/// everything else comes from the caller via [`NewRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique identifier, the sole lookup/delete key.
    pub id: String,
    /// Creation time, stored as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub source: MediaSource,
    /// Reference to the original, unprocessed media.
    pub original_uri: String,
    /// Reference to the downloaded processing result.
    pub processed_uri: String,
}

/// Attributes of a record to append; `id` and `timestamp` are generated.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub kind: MediaType,
    pub source: MediaSource,
    pub original_uri: String,
    pub processed_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let record = HistoryRecord {
            id: "1700000000000".to_string(),
            timestamp: Utc::now(),
            kind: MediaType::Image,
            source: MediaSource::Camera,
            original_uri: "file:///tmp/a.jpg".to_string(),
            processed_uri: "file:///tmp/b.jpg".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["source"], "camera");
        assert_eq!(json["originalUri"], "file:///tmp/a.jpg");
        assert_eq!(json["processedUri"], "file:///tmp/b.jpg");
        // Timestamp must be an ISO-8601 string, not a numeric epoch
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_record_roundtrip() {
        let json = r#"{
            "id": "42",
            "timestamp": "2024-01-15T10:30:45Z",
            "type": "video",
            "source": "gallery",
            "originalUri": "file:///tmp/clip.mp4",
            "processedUri": "file:///tmp/refined_clip.mp4"
        }"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, MediaType::Video);
        assert_eq!(record.source, MediaSource::Gallery);
        assert_eq!(record.id, "42");
    }
}
