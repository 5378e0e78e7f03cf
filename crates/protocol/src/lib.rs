//! Backend reply envelope and payload types.
//!
//! Every backend procedure answers with the same `{code, data}` envelope
//! ([`Response`]). `code == 0` is success; anything else is a failure and
//! the payload is ignored.

pub mod constants;
pub mod envelope;
pub mod types;

// Re-export primary types for convenience.
pub use constants::{Method, SUCCESS_CODE, UNKNOWN_KEY};
pub use envelope::{Response, ResponseError};
pub use types::{FirmwareInfo, GameData, unknown_game_data};
