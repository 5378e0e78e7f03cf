//! Client application state: firmware info synchronization and a cached
//! game data dictionary.
//!
//! This crate holds the **state logic** only. The desktop app provides a
//! [`Backend`] implementation that bridges to the backend process and a
//! [`Notifier`](nsemu_console_dialog::Notifier) that shows errors to the user.
//!
//! # Operations
//!
//! - **Firmware refresh** — clear the target version, fetch the firmware
//!   list, select its first entry; report failures to the notifier
//! - **Game data load** — serve the cached dictionary while it is usable,
//!   otherwise fetch it; failures are stored as an `{"unknown": "unknown"}`
//!   placeholder that forces the next load to fetch again

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod store;

// Re-export primary types for convenience.
pub use backend::{Backend, BackendFuture, JsonBackend, RpcTransport};
pub use config::StoreConfig;
pub use error::StateError;
pub use logging::init_tracing;
pub use state::{AppState, is_game_data_inited, is_game_data_usable};
pub use store::AppStore;
