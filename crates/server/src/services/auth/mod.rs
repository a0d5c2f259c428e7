//! Authentication service.
//!
//! Registration (account plus loft location in one transaction) and
//! password login.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use loftbook_core::{DmsCoordinate, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::user::{NewUser, Registration};

/// Authentication service.
///
/// Handles member registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new member and record their loft location.
    ///
    /// Validation runs strictly in order: credentials present, latitude
    /// parses, longitude parses, password hashes. Nothing is written until
    /// all four hold; the user and loft rows then commit atomically.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if username or password is empty.
    /// Returns `AuthError::InvalidLatitude` / `AuthError::InvalidLongitude` if
    /// a coordinate is not valid DMS notation.
    /// Returns `AuthError::UsernameTaken` if the username is already registered.
    pub async fn register(&self, registration: Registration) -> Result<UserId, AuthError> {
        // Validate credentials
        if registration.username.is_empty() || registration.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // Normalize coordinates, latitude first
        let latitude =
            DmsCoordinate::parse(&registration.latitude_dms).map_err(AuthError::InvalidLatitude)?;
        let longitude = DmsCoordinate::parse(&registration.longitude_dms)
            .map_err(AuthError::InvalidLongitude)?;

        // Hash password off the async runtime
        let password = registration.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        let new_user = NewUser {
            username: registration.username,
            password_hash,
            full_name: registration.full_name,
            email: registration.email,
            phone_number: registration.phone_number,
            latitude: latitude.decimal_degrees(),
            longitude: longitude.decimal_degrees(),
            latitude_dms: latitude.into_raw(),
            longitude_dms: longitude.into_raw(),
        };

        // Create user + loft in one transaction
        let user_id = self
            .users
            .create_with_loft(&new_user)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user_id)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is
    /// wrong. An unknown username produces the same error as a wrong
    /// password.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId, AuthError> {
        // Get user with password hash
        let (user_id, password_hash) = self
            .users
            .get_password_hash(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verify password off the async runtime
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await??;

        Ok(user_id)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str, lat: &str, lon: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
            full_name: "Mara Santos".to_string(),
            email: "mara@example.com".to_string(),
            phone_number: "+63 912 555 0101".to_string(),
            latitude_dms: lat.to_string(),
            longitude_dms: lon.to_string(),
        }
    }

    /// A pool that never connects; validation paths return before any query.
    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/loftbook_never_connects").unwrap()
    }

    #[test]
    fn test_hash_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));
        verify_password("hunter2", &hash).unwrap();
    }

    #[test]
    fn test_verify_wrong_password_fails() {
        let hash = hash_password("hunter2").unwrap();
        assert!(matches!(
            verify_password("hunter3", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_garbage_hash_fails() {
        assert!(matches!(
            verify_password("hunter2", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_username_before_parsing() {
        let pool = lazy_pool();
        let service = AuthService::new(&pool);

        // Coordinates are garbage; missing credentials must win.
        let result = service
            .register(registration("", "hunter2", "garbage", "garbage"))
            .await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_password_before_parsing() {
        let pool = lazy_pool();
        let service = AuthService::new(&pool);

        let result = service
            .register(registration("mara", "", "garbage", "garbage"))
            .await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_register_rejects_latitude_before_longitude() {
        let pool = lazy_pool();
        let service = AuthService::new(&pool);

        // Both coordinates invalid; latitude is checked first.
        let result = service
            .register(registration("mara", "hunter2", "garbage", "also garbage"))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidLatitude(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_longitude() {
        let pool = lazy_pool();
        let service = AuthService::new(&pool);

        let result = service
            .register(registration("mara", "hunter2", "14:09:12.42 N", "121:15 E"))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidLongitude(_))));
    }
}
