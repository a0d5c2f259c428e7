//! Race and race entry API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::{RaceEntryRepository, RaceRepository};
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::race::{NewRace, NewRaceEntry, Race};
use crate::state::AppState;

/// List all races, most recent release first.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Race>>> {
    let races = RaceRepository::new(state.pool()).list().await?;
    Ok(Json(races))
}

/// Create a race.
///
/// # Errors
///
/// Returns 400 if the body is invalid.
#[instrument(skip(state, race))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(race): ApiJson<NewRace>,
) -> Result<Json<MessageResponse>> {
    let race_id = RaceRepository::new(state.pool()).create(&race).await?;

    tracing::info!(race_id = race_id.as_i32(), name = %race.name, "race created");
    Ok(Json(MessageResponse::new("Race created")))
}

/// Enter a pigeon into a race.
///
/// # Errors
///
/// Returns 409 if the pigeon is already entered, 400 if the race or
/// pigeon doesn't exist or the body is invalid.
#[instrument(skip(state, entry))]
pub async fn register_pigeon(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewRaceEntry>,
) -> Result<Json<MessageResponse>> {
    RaceEntryRepository::new(state.pool()).create(entry).await?;

    tracing::info!(
        race_id = entry.race_id.as_i32(),
        pigeon_id = entry.pigeon_id.as_i32(),
        "pigeon entered"
    );
    Ok(Json(MessageResponse::new("Pigeon registered to race")))
}
