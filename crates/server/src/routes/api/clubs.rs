//! Club API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::ClubRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::club::{Club, NewClub};
use crate::state::AppState;

/// List all clubs.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Club>>> {
    let clubs = ClubRepository::new(state.pool()).list().await?;
    Ok(Json(clubs))
}

/// Create a club.
///
/// # Errors
///
/// Returns 400 if the body is invalid.
#[instrument(skip(state, club))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(club): ApiJson<NewClub>,
) -> Result<Json<MessageResponse>> {
    let club_id = ClubRepository::new(state.pool()).create(&club).await?;

    tracing::info!(club_id = club_id.as_i32(), "club created");
    Ok(Json(MessageResponse::new("Club created")))
}
