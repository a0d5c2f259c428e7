//! Audit log API handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::AuditLogRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::MessageResponse;
use crate::models::audit::{AuditLog, NewAuditLog};
use crate::state::AppState;

/// List audit log entries, most recent first.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AuditLog>>> {
    let entries = AuditLogRepository::new(state.pool()).list().await?;
    Ok(Json(entries))
}

/// Record an administrative action.
///
/// # Errors
///
/// Returns 400 if the acting user doesn't exist or the body is invalid.
#[instrument(skip(state, entry))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewAuditLog>,
) -> Result<Json<MessageResponse>> {
    let log_id = AuditLogRepository::new(state.pool()).create(&entry).await?;

    tracing::info!(
        log_id = log_id.as_i32(),
        user_id = entry.user_id.as_i32(),
        "audit entry recorded"
    );
    Ok(Json(MessageResponse::new("Audit log recorded")))
}
