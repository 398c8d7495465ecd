//! API response types.
//!
//! Entity and input shapes come from `kurnik-types`; only the health
//! probe has a response shape of its own.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

impl HealthResponse {
    /// The "everything is fine" response.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
