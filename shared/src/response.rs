//! API Response types

use serde::{Deserialize, Serialize};

/// Header carrying the number of rows a PUT / DELETE touched (`0` or `1`).
///
/// Updates and deletes of a missing id still answer 200; this header is the
/// only place the no-op shows up.
pub const ROWS_AFFECTED_HEADER: &str = "x-rows-affected";

/// `DELETE /api/menu` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

impl DeleteAck {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Error envelope
///
/// ```json
/// { "error": "Invalid type", "code": "E0006" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
