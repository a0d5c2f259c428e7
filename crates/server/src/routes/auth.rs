//! Authentication route handlers.
//!
//! Registration creates the account and its loft location in a single
//! transaction; login accepts either an HTML form post or a JSON body.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::extract::{ApiJson, FormOrJson};
use crate::models::MessageResponse;
use crate::models::user::{LoginRequest, LoginResponse, Registration};
use crate::services::AuthService;
use crate::state::AppState;

/// Register a new member.
///
/// Validates the DMS coordinates, hashes the password, and inserts the
/// user row plus a loft row carrying the registration coordinates. A
/// duplicate username rolls the whole transaction back.
#[instrument(skip(state, registration))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(registration): ApiJson<Registration>,
) -> Result<Json<MessageResponse>> {
    let service = AuthService::new(state.pool());
    let user_id = service.register(registration).await?;

    tracing::info!(user_id = user_id.as_i32(), "user registered");
    Ok(Json(MessageResponse::new("User registered with loft location")))
}

/// Verify a member's credentials.
///
/// Accepts `application/json` or form-encoded bodies. On success returns
/// the redirect payload the login page script expects.
#[instrument(skip(state, credentials))]
pub async fn login(
    State(state): State<AppState>,
    FormOrJson(credentials): FormOrJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(state.pool());
    let user_id = service
        .login(&credentials.username, &credentials.password)
        .await?;

    tracing::info!(user_id = user_id.as_i32(), "user logged in");
    Ok(Json(LoginResponse::success()))
}
