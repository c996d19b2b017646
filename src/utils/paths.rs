use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

/// Fallback extension for artifacts whose URL carries no usable one.
const DEFAULT_ARTIFACT_EXT: &str = "jpg";

/// Platform data directory holding the history store and artifacts
///
/// - macOS: `~/Library/Application Support/refiner/`
/// - Linux: `~/.local/share/refiner/`
/// - Windows: `%APPDATA%\refiner\`
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("refiner"))
}

/// Default location of the TOML configuration file
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join("refiner").join("refiner.toml"))
}

/// Generate a collision-free local filename for a downloaded artifact.
///
/// Time-derived (`refined_<epoch-millis>.<ext>`), with the extension taken
/// from the remote URL path when it looks like a plain media extension.
/// Millisecond resolution is sufficient: downloads are issued one at a time
/// by a single foreground caller.
pub fn artifact_filename(remote_url: &str) -> String {
    let ext = url_extension(remote_url).unwrap_or(DEFAULT_ARTIFACT_EXT);
    format!("refined_{}.{}", Utc::now().timestamp_millis(), ext)
}

/// Extract a plausible file extension from a URL, ignoring query/fragment.
fn url_extension(remote_url: &str) -> Option<&str> {
    let tail = remote_url.split(['?', '#']).next().unwrap_or(remote_url);
    Path::new(tail)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 4 && e.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_filename_keeps_url_extension() {
        let name = artifact_filename("https://example.com/output/result.png");
        assert!(name.starts_with("refined_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_artifact_filename_ignores_query_string() {
        let name = artifact_filename("https://example.com/clip.mp4?token=abc.def");
        assert!(name.ends_with(".mp4"));
    }

    #[test]
    fn test_artifact_filename_falls_back_without_extension() {
        let name = artifact_filename("https://picsum.photos/800/600?random=123");
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_url_extension_rejects_junk() {
        assert_eq!(url_extension("https://example.com/a.verylongext"), None);
        assert_eq!(url_extension("https://example.com/noext"), None);
        assert_eq!(url_extension("https://example.com/a.mp4"), Some("mp4"));
    }
}
