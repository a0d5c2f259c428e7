//! Member API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use loftbook_core::UserId;

use crate::db::{RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::user::{UpdateProfile, UserWithLoft};
use crate::state::AppState;

/// List all members joined with their registration loft.
///
/// Members who have no loft yet appear with `null` coordinates.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserWithLoft>>> {
    let users = UserRepository::new(state.pool()).list_with_lofts().await?;
    Ok(Json(users))
}

/// Update a member's profile fields.
///
/// # Errors
///
/// Returns 404 if the member doesn't exist, 400 if the body is invalid.
#[instrument(skip(state, update))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ApiJson(update): ApiJson<UpdateProfile>,
) -> Result<Json<MessageResponse>> {
    UserRepository::new(state.pool())
        .update_profile(id, &update)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("User".to_owned()),
            other => AppError::Database(other),
        })?;

    tracing::info!(user_id = id.as_i32(), "profile updated");
    Ok(Json(MessageResponse::new("User updated")))
}
