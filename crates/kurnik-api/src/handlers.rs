//! API request handlers.
//!
//! One handler per operation; each is a stateless adapter that
//! validates the HTTP input, calls the storage port, and lets
//! [`ApiError`] translate failures into status codes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kurnik_types::{Kogut, KogutId, KogutInput};

use crate::error::{ApiError, Result};
use crate::router::AppState;
use crate::types::HealthResponse;

/// A request body that may have failed extraction.
///
/// Taking the rejection explicitly keeps malformed JSON at 400 instead
/// of axum's default 422.
type Body = std::result::Result<Json<KogutInput>, JsonRejection>;

fn parse_id(raw: &str) -> Result<KogutId> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {raw}")))
}

fn validate(body: Body) -> Result<KogutInput> {
    let Json(input) = body.map_err(|err| ApiError::BadRequest(err.to_string()))?;
    if input.name.is_empty() {
        return Err(ApiError::BadRequest("name is required".to_string()));
    }
    Ok(input)
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// `POST /koguts` - creates a kogut.
pub async fn create_kogut(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<Kogut>)> {
    let input = validate(body)?;
    let kogut = state.store.create(input).await?;

    tracing::debug!(id = kogut.id, "created kogut");
    Ok((StatusCode::CREATED, Json(kogut)))
}

/// `GET /koguts/{id}` - fetches a single kogut.
pub async fn get_kogut(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Kogut>> {
    let id = parse_id(&id)?;
    Ok(Json(state.store.get(id).await?))
}

/// `GET /koguts` - lists all koguts.
pub async fn list_koguts(State(state): State<AppState>) -> Result<Json<Vec<Kogut>>> {
    Ok(Json(state.store.list().await?))
}

/// `PUT /koguts/{id}` - replaces a kogut's mutable fields.
pub async fn update_kogut(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Body,
) -> Result<Json<Kogut>> {
    let id = parse_id(&id)?;
    let input = validate(body)?;
    Ok(Json(state.store.update(id, input).await?))
}

/// `DELETE /koguts/{id}` - deletes a kogut.
pub async fn delete_kogut(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;

    tracing::debug!(id, "deleted kogut");
    Ok(StatusCode::NO_CONTENT)
}
