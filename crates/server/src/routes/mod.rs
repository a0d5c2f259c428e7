//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Login page
//! GET  /register               - Registration page
//! GET  /dashboard              - Dashboard with record counts
//! GET  /users                  - Member table with loft coordinates
//! GET  /health                 - Health check (wired in main)
//!
//! # Auth
//! POST /register               - Create account + loft location
//! POST /login                  - Verify credentials (form or JSON)
//!
//! # JSON API
//! GET  /api/users              - Members joined with registration lofts
//! PUT  /api/users/{id}         - Update profile fields
//! GET  /api/clubs              POST /api/clubs
//! GET  /api/devices            POST /api/devices
//! GET  /api/lofts              POST /api/lofts
//! GET  /api/pigeons            POST /api/pigeons
//! GET  /api/races              POST /api/races
//! POST /api/race-participants  - Enter a pigeon into a race
//! GET  /api/clockings          POST /api/clockings      (?race_id= filter)
//! GET  /api/race-results       POST /api/race-results   (?race_id= filter)
//! GET  /api/audit-logs         POST /api/audit-logs
//! ```

pub mod api;
pub mod auth;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::login_page))
        .route("/register", get(pages::register_page).post(auth::register))
        .route("/dashboard", get(pages::dashboard))
        .route("/users", get(pages::users))
        // Auth
        .route("/login", post(auth::login))
        // JSON API
        .nest("/api", api::routes())
}
