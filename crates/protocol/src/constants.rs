/// Envelope code reported by the backend on success.
pub const SUCCESS_CODE: i32 = 0;

/// Key and value of the game data placeholder written after a failed fetch.
pub const UNKNOWN_KEY: &str = "unknown";

/// Backend procedure identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetAvailableFirmwareInfos,
    GetGameData,
}

impl Method {
    /// Wire name of the procedure as exposed by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GetAvailableFirmwareInfos => "get_available_firmware_infos",
            Method::GetGameData => "get_game_data",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
