//! Small file-per-key JSON store for application settings, standing in
//! for the browser's local storage: synchronous reads and writes, a
//! fixed key per setting, last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the generation-server configuration is persisted under.
pub const GENERATION_CONFIG_KEY: &str = "generation_server";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn app_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    base.join("novelry")
}

/// Generation-server settings. Field names match the persisted JSON
/// blob (`serverUrl`), so documents written by earlier builds load
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub enabled: bool,
    pub server_url: String,
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            server_url: "http://127.0.0.1:11434".to_string(),
            model: "llama3".to_string(),
        }
    }
}

/// Settings root. Opens against the platform data directory in the app
/// and against a scratch directory in tests.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    root: PathBuf,
}

impl SettingsStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn open_default() -> Self {
        Self::open(app_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read a stored value. Missing, unreadable, or malformed data is
    /// treated as absence.
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.key_path(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("discarding malformed settings blob {key:?}: {err}");
                None
            }
        }
    }

    /// Overwrite a stored value, creating the root directory on demand.
    pub fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    /// Load the generation configuration; never fails. Absent or
    /// malformed data yields the defaults.
    pub fn load_generation(&self) -> GenerationConfig {
        self.read_value(GENERATION_CONFIG_KEY).unwrap_or_default()
    }

    /// Persist the full generation configuration. The server URL is
    /// stored as given; no shape validation happens here.
    pub fn save_generation(&self, config: &GenerationConfig) -> Result<(), SettingsError> {
        self.write_value(GENERATION_CONFIG_KEY, config)
    }
}
