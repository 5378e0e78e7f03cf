//! Error types for the application state container.

use nsemu_protocol::ResponseError;

/// Errors produced while talking to the backend or handling configuration.
///
/// The state operations never return these to their callers. They are logged
/// and folded into each operation's single failure path.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Response(#[from] ResponseError),

    #[error("transport error: {0}")]
    Transport(String),
}
