//! State container configuration.
//!
//! Stored as JSON; every field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Message appended to the console dialog when the firmware list fails to load.
pub const DEFAULT_FIRMWARE_LOAD_FAILED_MESSAGE: &str = "firmware information failed to load";

/// Tunables for [`AppStore`](crate::AppStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Text reported to the notifier when a firmware refresh fails.
    pub firmware_load_failed_message: String,

    /// Serialize overlapping game data loads so only one backend request is
    /// in flight; later callers reuse its result once it is usable.
    ///
    /// Off by default: every load that finds the cache unusable issues its
    /// own request and the last reply wins.
    pub coalesce_game_data_fetches: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            firmware_load_failed_message: DEFAULT_FIRMWARE_LOAD_FAILED_MESSAGE.into(),
            coalesce_game_data_fetches: false,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from a JSON file.
    ///
    /// A missing file yields the defaults. An unparsable file is logged and
    /// also yields the defaults; other I/O errors are returned.
    pub fn load_from(path: &Path) -> Result<Self, StateError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store config, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoreConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse store config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Saves configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
