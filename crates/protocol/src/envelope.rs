use serde::{Deserialize, Serialize};

use crate::constants::SUCCESS_CODE;

/// Why a backend reply could not be turned into a payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    #[error("backend reported code {code}{}", message_suffix(.message))]
    Status { code: i32, message: Option<String> },

    #[error("backend reported success without data")]
    MissingData,
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Reply envelope shared by every backend procedure.
///
/// `code == 0` means success and `data` carries the payload. Any other code
/// is a failure; `data` is then meaningless and usually null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub code: i32,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> Response<T> {
    /// Creates a successful reply carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            msg: None,
        }
    }

    /// Creates a failed reply with the given non-zero code.
    pub fn failure(code: i32, msg: Option<String>) -> Self {
        Self {
            code,
            data: None,
            msg,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwraps the payload, mapping a non-zero code or a missing payload to
    /// a [`ResponseError`].
    pub fn into_result(self) -> Result<T, ResponseError> {
        if !self.is_success() {
            return Err(ResponseError::Status {
                code: self.code,
                message: self.msg,
            });
        }
        self.data.ok_or(ResponseError::MissingData)
    }
}
