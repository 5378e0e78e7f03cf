//! Application state container: firmware info synchronization and the game
//! data cache.
//!
//! Each operation awaits the backend exactly once. State is updated in short
//! synchronous critical sections before and after that await, never across
//! it, so overlapping operations interleave as last-writer-wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nsemu_console_dialog::Notifier;
use nsemu_protocol::{FirmwareInfo, GameData, unknown_game_data};
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::config::StoreConfig;
use crate::error::StateError;
use crate::state::AppState;

/// Process-wide client state shared by the UI.
///
/// Construct once at startup and hand out by reference (or `Arc`).
pub struct AppStore {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    config: StoreConfig,
    state: Mutex<AppState>,
    /// Held for the duration of a game data fetch when coalescing is on.
    game_data_gate: tokio::sync::Mutex<()>,
}

impl AppStore {
    /// Creates a store with default configuration.
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(backend, notifier, StoreConfig::default())
    }

    pub fn with_config(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        config: StoreConfig,
    ) -> Self {
        Self {
            backend,
            notifier,
            config,
            state: Mutex::new(AppState::default()),
            game_data_gate: tokio::sync::Mutex::new(()),
        }
    }

    fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the whole state.
    pub fn snapshot(&self) -> AppState {
        self.state().clone()
    }

    pub fn target_firmware_version(&self) -> Option<String> {
        self.state().target_firmware_version().map(str::to_owned)
    }

    pub fn available_firmware_infos(&self) -> Vec<FirmwareInfo> {
        self.state().available_firmware_infos().to_vec()
    }

    /// Current cache content, which may be empty or the failure placeholder.
    pub fn game_data(&self) -> GameData {
        self.state().game_data().clone()
    }

    pub fn game_data_inited(&self) -> bool {
        self.state().game_data_inited()
    }

    /// Refreshes the list of available firmware builds.
    ///
    /// The target version is cleared immediately, before the request goes
    /// out, and stays `None` until a successful reply selects the first
    /// build. On failure the previous list is kept and the notifier is
    /// opened with a message. Overlapping refreshes are not cancelled; the
    /// reply that arrives last wins.
    pub async fn update_available_firmware_infos(&self) {
        self.state().clear_target_firmware();
        debug!("requesting available firmware infos");

        let result = match self.backend.get_available_firmware_infos().await {
            Ok(resp) => resp.into_result().map_err(StateError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(infos) => self.apply_firmware_infos(infos),
            Err(e) => {
                warn!(error = %e, "failed to load firmware infos");
                self.notifier.open();
                self.notifier
                    .append_message(&self.config.firmware_load_failed_message);
            }
        }
    }

    fn apply_firmware_infos(&self, infos: Vec<FirmwareInfo>) {
        let count = infos.len();
        let mut state = self.state();
        state.apply_firmware_infos(infos);
        match state.target_firmware_version() {
            Some(target) => info!(count, target, "firmware infos loaded"),
            None => warn!("backend returned an empty firmware list"),
        }
    }

    /// Returns game data, fetching it only when the cache is unusable.
    ///
    /// Never fails: a failed fetch stores and returns the
    /// `{"unknown": "unknown"}` placeholder, which makes the next call fetch
    /// again. No notifier is involved.
    pub async fn load_game_data(&self) -> GameData {
        if let Some(cached) = self.cached_game_data() {
            return cached;
        }

        if !self.config.coalesce_game_data_fetches {
            return self.fetch_game_data().await;
        }

        let _gate = self.game_data_gate.lock().await;
        // Another load may have filled the cache while we waited.
        if let Some(cached) = self.cached_game_data() {
            return cached;
        }
        self.fetch_game_data().await
    }

    fn cached_game_data(&self) -> Option<GameData> {
        let cached = self.state().usable_game_data();
        if let Some(data) = &cached {
            debug!(count = data.len(), "game data served from cache");
        }
        cached
    }

    async fn fetch_game_data(&self) -> GameData {
        debug!("requesting game data");
        let result = match self.backend.get_game_data().await {
            Ok(resp) => resp.into_result().map_err(StateError::from),
            Err(e) => Err(e),
        };

        let data = match result {
            Ok(data) => {
                info!(count = data.len(), "game data loaded");
                data
            }
            Err(e) => {
                warn!(error = %e, "failed to load game data");
                unknown_game_data()
            }
        };

        self.state().set_game_data(data.clone());
        data
    }
}
