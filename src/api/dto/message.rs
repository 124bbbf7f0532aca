//! Generic status message response.

use serde::Serialize;

/// Plain acknowledgement body, e.g. `{"code": 200, "message": "success"}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub code: u16,
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
        }
    }
}
