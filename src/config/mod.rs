//! Startup configuration.
//!
//! The mock/live choice is made exactly once, here, when the configuration
//! is loaded; the rest of the crate works against the selected
//! [`ProcessingClient`](crate::client::ProcessingClient) and never branches
//! on the mode again.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which processing client implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    Mock,
    Live,
}

/// Configuration loaded from an optional TOML file, with CLI overrides
/// applied by the command layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: ClientMode,
    /// Base URL of the live processing service.
    pub api_base_url: String,
    /// Override for the directory holding the history store.
    pub data_dir: Option<PathBuf>,
    /// Override for the directory downloaded artifacts land in.
    pub artifact_dir: Option<PathBuf>,
    /// Override for the mock client's simulated delay.
    pub mock_delay_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ClientMode::Mock,
            api_base_url: "https://api.example.com".to_string(),
            data_dir: None,
            artifact_dir: None,
            mock_delay_ms: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults
    /// (mock mode); an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
