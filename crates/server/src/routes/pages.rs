//! Server-rendered page handlers.
//!
//! Login and registration are standalone pages; the dashboard and member
//! table extend the shared base layout.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::{ClubRepository, PigeonRepository, RaceRepository, UserRepository};
use crate::error::Result;
use crate::models::user::UserWithLoft;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate;

/// Dashboard template with club record counts.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub active_page: &'static str,
    pub user_count: i64,
    pub pigeon_count: i64,
    pub race_count: i64,
    pub club_count: i64,
}

/// Member table template.
#[derive(Template, WebTemplate)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub active_page: &'static str,
    pub users: Vec<UserWithLoft>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
#[instrument]
pub async fn login_page() -> LoginTemplate {
    LoginTemplate
}

/// Display the registration page.
#[instrument]
pub async fn register_page() -> RegisterTemplate {
    RegisterTemplate
}

/// Display the dashboard with record counts.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<DashboardTemplate> {
    let pool = state.pool();
    let users = UserRepository::new(pool);
    let pigeons = PigeonRepository::new(pool);
    let races = RaceRepository::new(pool);
    let clubs = ClubRepository::new(pool);

    // Count the four record kinds in parallel
    let (user_count, pigeon_count, race_count, club_count) =
        tokio::try_join!(users.count(), pigeons.count(), races.count(), clubs.count())?;

    Ok(DashboardTemplate {
        active_page: "dashboard",
        user_count,
        pigeon_count,
        race_count,
        club_count,
    })
}

/// Display the member table with registration loft coordinates.
#[instrument(skip(state))]
pub async fn users(State(state): State<AppState>) -> Result<UsersTemplate> {
    let users = UserRepository::new(state.pool()).list_with_lofts().await?;

    Ok(UsersTemplate {
        active_page: "users",
        users,
    })
}
