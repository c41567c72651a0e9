//! Shared one-field response shapes.

use serde::Serialize;

/// Human-readable confirmation, used by association and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Single aggregate figure, used by balance and ledger total endpoints.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: f64,
}
