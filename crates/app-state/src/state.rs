use serde::Serialize;

use nsemu_protocol::{FirmwareInfo, GameData, UNKNOWN_KEY};

/// Whether game data has ever been populated (successfully or with the
/// failure placeholder).
pub fn is_game_data_inited(data: &GameData) -> bool {
    !data.is_empty()
}

/// Whether cached game data can be served without asking the backend again.
///
/// Empty data was never loaded; data holding the `"unknown"` key is the
/// placeholder left by a failed fetch. Both force a refetch.
pub fn is_game_data_usable(data: &GameData) -> bool {
    is_game_data_inited(data) && !data.contains_key(UNKNOWN_KEY)
}

/// Snapshot of the client application state.
///
/// Fields are only changed by [`AppStore`](crate::AppStore) operations;
/// callers get read-only copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    target_firmware_version: Option<String>,
    available_firmware_infos: Vec<FirmwareInfo>,
    game_data: GameData,
}

impl AppState {
    /// Version of the default firmware selection. `None` while nothing is
    /// loaded, while a refresh is in flight, or after a failed refresh.
    pub fn target_firmware_version(&self) -> Option<&str> {
        self.target_firmware_version.as_deref()
    }

    pub fn available_firmware_infos(&self) -> &[FirmwareInfo] {
        &self.available_firmware_infos
    }

    pub fn game_data(&self) -> &GameData {
        &self.game_data
    }

    pub fn game_data_inited(&self) -> bool {
        is_game_data_inited(&self.game_data)
    }

    pub fn game_data_usable(&self) -> bool {
        is_game_data_usable(&self.game_data)
    }

    pub(crate) fn clear_target_firmware(&mut self) {
        self.target_firmware_version = None;
    }

    /// Replaces the firmware list and selects its first entry.
    ///
    /// An empty list leaves the target unset.
    pub(crate) fn apply_firmware_infos(&mut self, infos: Vec<FirmwareInfo>) {
        self.target_firmware_version = infos.first().map(|info| info.version.clone());
        self.available_firmware_infos = infos;
    }

    /// Cached game data, if it can be served as-is.
    pub(crate) fn usable_game_data(&self) -> Option<GameData> {
        self.game_data_usable().then(|| self.game_data.clone())
    }

    pub(crate) fn set_game_data(&mut self, data: GameData) {
        self.game_data = data;
    }
}
