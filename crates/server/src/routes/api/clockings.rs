//! Clocking API handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::db::ClockingRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::clocking::{Clocking, NewClocking};
use crate::models::race::RaceFilter;
use crate::state::AppState;

/// List clockings in arrival order, optionally filtered by `?race_id=`.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<RaceFilter>,
) -> Result<Json<Vec<Clocking>>> {
    let clockings = ClockingRepository::new(state.pool())
        .list(filter.race_id)
        .await?;
    Ok(Json(clockings))
}

/// Record an arrival clocking.
///
/// # Errors
///
/// Returns 400 if a referenced row doesn't exist or the body is invalid.
#[instrument(skip(state, clocking))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(clocking): ApiJson<NewClocking>,
) -> Result<Json<MessageResponse>> {
    let clocking_id = ClockingRepository::new(state.pool())
        .create(&clocking)
        .await?;

    tracing::info!(
        clocking_id = clocking_id.as_i32(),
        race_id = clocking.race_id.as_i32(),
        "clocking recorded"
    );
    Ok(Json(MessageResponse::new("Clocking recorded")))
}
