//! API router configuration.

use crate::handlers;
use axum::routing::get;
use axum::Router;
use kurnik_storage::KogutStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Constructed once at startup and cloned into every handler; the
/// storage port behind the `Arc` is the only shared state in the
/// process.
#[derive(Clone)]
pub struct AppState {
    /// The storage port.
    pub store: Arc<dyn KogutStore>,
}

impl AppState {
    /// Creates application state over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn KogutStore>) -> Self {
        Self { store }
    }
}

/// Creates the API router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/koguts",
            get(handlers::list_koguts).post(handlers::create_kogut),
        )
        .route(
            "/koguts/{id}",
            get(handlers::get_kogut)
                .put(handlers::update_kogut)
                .delete(handlers::delete_kogut),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
