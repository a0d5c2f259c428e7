//! Race result API handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::db::RaceResultRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::race::{NewRaceResult, RaceFilter, RaceResult};
use crate::state::AppState;

/// List results in rank order, optionally filtered by `?race_id=`.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<RaceFilter>,
) -> Result<Json<Vec<RaceResult>>> {
    let results = RaceResultRepository::new(state.pool())
        .list(filter.race_id)
        .await?;
    Ok(Json(results))
}

/// Record a final ranked result.
///
/// # Errors
///
/// Returns 409 if the pigeon already has a result for this race, 400 if
/// the race or pigeon doesn't exist or the body is invalid.
#[instrument(skip(state, result))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(result): ApiJson<NewRaceResult>,
) -> Result<Json<MessageResponse>> {
    let result_id = RaceResultRepository::new(state.pool())
        .create(&result)
        .await?;

    tracing::info!(
        result_id = result_id.as_i32(),
        race_id = result.race_id.as_i32(),
        rank = result.rank,
        "result recorded"
    );
    Ok(Json(MessageResponse::new("Race result inserted")))
}
