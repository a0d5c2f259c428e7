//! Database operations for Loftbook `PostgreSQL`.
//!
//! # Schema: `loftbook`
//!
//! ## Tables
//!
//! - `user` - Member accounts and credentials
//! - `loft` - Loft locations (raw DMS notation plus decimal degrees)
//! - `club` - Racing clubs
//! - `device` - Electronic clocking devices
//! - `pigeon` - Registered pigeons
//! - `race` - Races
//! - `race_entry` - Pigeons entered into races
//! - `clocking` - Arrival clockings
//! - `race_result` - Final ranked results
//! - `audit_log` - Administrative audit trail
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p loftbook-cli -- migrate
//! ```

pub mod audit_logs;
pub mod clockings;
pub mod clubs;
pub mod devices;
pub mod lofts;
pub mod pigeons;
pub mod race_entries;
pub mod race_results;
pub mod races;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use audit_logs::AuditLogRepository;
pub use clockings::ClockingRepository;
pub use clubs::ClubRepository;
pub use devices::DeviceRepository;
pub use lofts::LoftRepository;
pub use pigeons::PigeonRepository;
pub use race_entries::RaceEntryRepository;
pub use race_results::RaceResultRepository;
pub use races::RaceRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A foreign key in the request does not reference an existing row.
    #[error("invalid reference: {0}")]
    ForeignKey(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx error to [`RepositoryError::ForeignKey`] when a referenced row
/// does not exist, passing everything else through as a database error.
pub(crate) fn map_foreign_key(e: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::ForeignKey(what.to_owned());
    }
    RepositoryError::Database(e)
}
