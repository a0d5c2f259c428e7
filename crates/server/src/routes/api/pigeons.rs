//! Pigeon API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::PigeonRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::pigeon::{NewPigeon, Pigeon};
use crate::state::AppState;

/// List all pigeons.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pigeon>>> {
    let pigeons = PigeonRepository::new(state.pool()).list().await?;
    Ok(Json(pigeons))
}

/// Add a pigeon.
///
/// # Errors
///
/// Returns 409 if the ring number is taken, 400 if the owner doesn't
/// exist or the body is invalid.
#[instrument(skip(state, pigeon))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(pigeon): ApiJson<NewPigeon>,
) -> Result<Json<MessageResponse>> {
    let pigeon_id = PigeonRepository::new(state.pool()).create(&pigeon).await?;

    tracing::info!(
        pigeon_id = pigeon_id.as_i32(),
        ring_number = %pigeon.ring_number,
        "pigeon added"
    );
    Ok(Json(MessageResponse::new("Pigeon added")))
}
