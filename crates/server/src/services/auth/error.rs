//! Authentication error types.

use thiserror::Error;

use loftbook_core::DmsCoordinateError;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password missing from the request.
    #[error("username and password are required")]
    MissingCredentials,

    /// Latitude is not valid DMS notation.
    #[error("invalid latitude: {0}")]
    InvalidLatitude(DmsCoordinateError),

    /// Longitude is not valid DMS notation.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(DmsCoordinateError),

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username already registered.
    #[error("username already taken")]
    UsernameTaken,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// A blocking hash task panicked or was cancelled.
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
