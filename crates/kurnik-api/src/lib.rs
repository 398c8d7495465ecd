//! # Kurnik API
//!
//! HTTP API for the Kurnik service: CRUD endpoints over the kogut
//! store plus a liveness probe. Handlers are stateless adapters from
//! HTTP to the storage port; all state lives behind
//! [`AppState`](router::AppState).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod handlers;
mod router;
mod types;

pub use error::{ApiError, Result};
pub use router::{create_router, AppState};
pub use types::HealthResponse;

/// Default API port.
pub const DEFAULT_API_PORT: u16 = 3000;
