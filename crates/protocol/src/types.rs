use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::UNKNOWN_KEY;

/// Game title metadata keyed by title id, as served by `get_game_data`.
pub type GameData = BTreeMap<String, String>;

/// One firmware build offered by the backend.
///
/// Only `version` is interpreted by the client. Everything else the backend
/// sends (name, download url, size, ...) is carried along untouched in
/// `extra`, whatever its JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirmwareInfo {
    #[serde(deserialize_with = "version_string")]
    pub version: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FirmwareInfo {
    /// Creates a record carrying only a version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Looks up a field other than `version`.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// Accepts a version sent either as a string or as a bare number.
fn version_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Version::deserialize(deserializer)? {
        Version::Text(s) => s,
        Version::Number(n) => n.to_string(),
    })
}

/// The single-entry placeholder (`{"unknown": "unknown"}`) stored after a
/// failed game data fetch.
pub fn unknown_game_data() -> GameData {
    GameData::from([(UNKNOWN_KEY.to_owned(), UNKNOWN_KEY.to_owned())])
}
