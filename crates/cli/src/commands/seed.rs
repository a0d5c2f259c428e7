//! Seed the database with demo club records.
//!
//! Creates one member account (through the normal registration path, so the
//! loft transaction and password hashing are exercised), a club, two pigeons
//! and a scheduled race with both pigeons entered.
//!
//! # Environment Variables
//!
//! - `LOFTBOOK_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use chrono::{Duration, Utc};
use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use loftbook_server::db::{
    self, ClubRepository, PigeonRepository, RaceEntryRepository, RaceRepository, RepositoryError,
    UserRepository,
};
use loftbook_server::models::club::NewClub;
use loftbook_server::models::pigeon::NewPigeon;
use loftbook_server::models::race::{NewRace, NewRaceEntry};
use loftbook_server::models::user::Registration;
use loftbook_server::services::{AuthError, AuthService};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The demo member already exists.
    #[error("Member already exists: {0} (database already seeded?)")]
    AlreadySeeded(String),

    /// Registration failed.
    #[error("Registration failed: {0}")]
    Auth(#[from] AuthError),

    /// Record insert failed.
    #[error("Insert failed: {0}")]
    Repository(#[from] RepositoryError),
}

/// Seed the database with a demo member, club, pigeons and a race.
///
/// # Errors
///
/// Returns `SeedError::AlreadySeeded` if the member username is taken, and
/// propagates database and registration failures.
pub async fn run(username: &str, password: &str) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("LOFTBOOK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("LOFTBOOK_DATABASE_URL"))?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    // Bail out early if this member was seeded before
    let users = UserRepository::new(&pool);
    if users.get_password_hash(username).await?.is_some() {
        return Err(SeedError::AlreadySeeded(username.to_owned()));
    }

    info!("Registering demo member: {username}");
    let auth = AuthService::new(&pool);
    let user_id = auth
        .register(Registration {
            username: username.to_owned(),
            password: password.to_owned(),
            full_name: "Demo Fancier".to_owned(),
            email: format!("{username}@example.com"),
            phone_number: "+63 912 555 0100".to_owned(),
            latitude_dms: "14:09:12.42 N".to_owned(),
            longitude_dms: "121:15:58.30 E".to_owned(),
        })
        .await?;

    info!("Creating demo club");
    ClubRepository::new(&pool)
        .create(&NewClub {
            name: "San Pablo Racing Club".to_owned(),
            location: "San Pablo, Laguna".to_owned(),
        })
        .await?;

    info!("Adding demo pigeons");
    let pigeons = PigeonRepository::new(&pool);
    let first = pigeons
        .create(&NewPigeon {
            user_id,
            ring_number: format!("PH-2026-{:04}", user_id.as_i32()),
            name: "Blue Bar".to_owned(),
            color: "blue bar".to_owned(),
            sex: "cock".to_owned(),
            breed: "racing homer".to_owned(),
            birth_date: None,
        })
        .await?;
    let second = pigeons
        .create(&NewPigeon {
            user_id,
            ring_number: format!("PH-2026-{:04}", user_id.as_i32() + 5000),
            name: "Checker Hen".to_owned(),
            color: "checker".to_owned(),
            sex: "hen".to_owned(),
            breed: "racing homer".to_owned(),
            birth_date: None,
        })
        .await?;

    info!("Scheduling demo race");
    let race_id = RaceRepository::new(&pool)
        .create(&NewRace {
            name: "Ilocos 400".to_owned(),
            release_point: "Laoag".to_owned(),
            distance_km: 402.5,
            release_time: Utc::now() + Duration::days(14),
        })
        .await?;

    let entries = RaceEntryRepository::new(&pool);
    entries
        .create(NewRaceEntry {
            race_id,
            pigeon_id: first,
        })
        .await?;
    entries
        .create(NewRaceEntry {
            race_id,
            pigeon_id: second,
        })
        .await?;

    info!("Seeding complete!");
    info!("  Member: {username} (id {})", user_id.as_i32());
    info!("  Club: San Pablo Racing Club");
    info!("  Pigeons: 2 entered into race {}", race_id.as_i32());

    Ok(())
}
