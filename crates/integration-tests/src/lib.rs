//! Shared helpers for Loftbook integration tests.
//!
//! The tests in `tests/` exercise the HTTP API end to end and therefore
//! require:
//!
//! - A running `PostgreSQL` database with the `loftbook` schema migrated
//!   (`cargo run -p loftbook-cli -- migrate`)
//! - The server running (`cargo run -p loftbook-server`)
//!
//! Everything that talks to the server is `#[ignore]`d by default. Run with:
//!
//! ```bash
//! cargo test -p loftbook-integration-tests -- --ignored
//! ```
//!
//! Configuration comes from the environment:
//!
//! - `LOFTBOOK_BASE_URL` - server base URL (default `http://localhost:2000`)
//! - `LOFTBOOK_DATABASE_URL` / `DATABASE_URL` - connection string for tests
//!   that assert on rows directly

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::PgPool;

/// Base URL of the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LOFTBOOK_BASE_URL").unwrap_or_else(|_| "http://localhost:2000".to_string())
}

/// HTTP client for talking to the server.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the test database for row-level assertions.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("LOFTBOOK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("LOFTBOOK_DATABASE_URL or DATABASE_URL must be set");
    loftbook_server::db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to test database")
}

/// A unique username so tests never collide on the `user.username` constraint.
#[must_use]
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

/// The `{"message": ...}` body returned by every mutating endpoint.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// A valid registration payload for `username`.
///
/// Coordinates are a loft in San Pablo; individual tests override fields
/// as needed.
#[must_use]
pub fn registration_json(username: &str) -> Value {
    json!({
        "username": username,
        "password": "correct horse battery staple",
        "full_name": "Test Fancier",
        "email": format!("{username}@example.com"),
        "phone_number": "+63-917-555-0199",
        "latitude_dms": "14:09:12.42 N",
        "longitude_dms": "121:15:58.30 E",
    })
}

/// Register a member and return their id from the users listing.
///
/// # Panics
///
/// Panics if registration or the listing request fails.
pub async fn register_member(client: &reqwest::Client, username: &str) -> i32 {
    let base = base_url();
    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(username))
        .send()
        .await
        .expect("Failed to register member");
    assert!(
        resp.status().is_success(),
        "registration failed: {}",
        resp.status()
    );

    let users: Vec<Value> = client
        .get(format!("{base}/api/users"))
        .send()
        .await
        .expect("Failed to list users")
        .json()
        .await
        .expect("Failed to decode users list");

    let user = users
        .iter()
        .find(|u| u["username"] == username)
        .expect("registered user missing from listing");
    i32::try_from(user["user_id"].as_i64().expect("user_id should be a number"))
        .expect("user_id out of range")
}
