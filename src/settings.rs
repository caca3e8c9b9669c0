// src/settings.rs
use std::fs;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use tracing::warn;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Analysis service endpoint.
    pub endpoint: String,
    /// Override for where pending/history slots are stored.
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_dir: None,
        }
    }
}

impl Settings {
    /// Load settings.ron from the platform config directory. A missing or
    /// unparseable file degrades to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match ron::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("sentiview").join("settings.ron"))
    }

    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sentiview")
    }
}
