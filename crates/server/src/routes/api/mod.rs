//! JSON API route handlers.
//!
//! One module per record kind. Every create endpoint answers
//! `{"message": ...}` on success and `{"error": ...}` on failure; the
//! list endpoints answer plain JSON arrays.

pub mod audit_logs;
pub mod clockings;
pub mod clubs;
pub mod devices;
pub mod lofts;
pub mod pigeons;
pub mod race_results;
pub mod races;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Build the complete API router, nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/{id}", put(users::update))
        .route("/clubs", get(clubs::list).post(clubs::create))
        .route("/devices", get(devices::list).post(devices::create))
        .route("/lofts", get(lofts::list).post(lofts::create))
        .route("/pigeons", get(pigeons::list).post(pigeons::create))
        .route("/races", get(races::list).post(races::create))
        .route("/race-participants", post(races::register_pigeon))
        .route("/clockings", get(clockings::list).post(clockings::create))
        .route(
            "/race-results",
            get(race_results::list).post(race_results::create),
        )
        .route(
            "/audit-logs",
            get(audit_logs::list).post(audit_logs::create),
        )
}
