//! Loft API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::LoftRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::loft::{Loft, NewLoft};
use crate::state::AppState;

/// List all lofts.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Loft>>> {
    let lofts = LoftRepository::new(state.pool()).list().await?;
    Ok(Json(lofts))
}

/// Save an additional loft location from decimal coordinates.
///
/// Registration lofts carry raw DMS notation; lofts saved here are
/// decimal-only.
///
/// # Errors
///
/// Returns 400 if the owner doesn't exist or the body is invalid.
#[instrument(skip(state, loft))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(loft): ApiJson<NewLoft>,
) -> Result<Json<MessageResponse>> {
    let loft_id = LoftRepository::new(state.pool()).create(&loft).await?;

    tracing::info!(loft_id = loft_id.as_i32(), "loft saved");
    Ok(Json(MessageResponse::new("Loft location saved")))
}
