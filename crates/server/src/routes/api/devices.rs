//! Clocking device API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::DeviceRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::device::{Device, NewDevice};
use crate::state::AppState;

/// List all clocking devices.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Device>>> {
    let devices = DeviceRepository::new(state.pool()).list().await?;
    Ok(Json(devices))
}

/// Register a clocking device.
///
/// # Errors
///
/// Returns 409 if the serial number is taken, 400 if the owner doesn't
/// exist or the body is invalid.
#[instrument(skip(state, device))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(device): ApiJson<NewDevice>,
) -> Result<Json<MessageResponse>> {
    let device_id = DeviceRepository::new(state.pool()).create(&device).await?;

    tracing::info!(device_id = device_id.as_i32(), "device registered");
    Ok(Json(MessageResponse::new("Device registered")))
}
