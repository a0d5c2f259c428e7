//! Integration tests for member registration and login.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p loftbook-cli -- migrate)
//! - The server running (cargo run -p loftbook-server)
//!
//! Run with: cargo test -p loftbook-integration-tests -- --ignored

use loftbook_core::DmsCoordinate;
use loftbook_integration_tests::{
    MessageBody, base_url, client, registration_json, test_pool, unique_username,
};
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_register_creates_user_and_loft() {
    let client = client();
    let base = base_url();
    let username = unique_username("reg");

    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(&username))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageBody = resp.json().await.expect("Failed to decode response");
    assert_eq!(body.message, "User registered with loft location");

    // Registration is one transaction over two tables; both rows must exist
    // and the stored decimals must match the DMS notation that was sent.
    let pool = test_pool().await;
    let (latitude, longitude, latitude_dms): (f64, f64, Option<String>) = sqlx::query_as(
        "SELECT l.latitude, l.longitude, l.latitude_dms
         FROM loftbook.user u
         JOIN loftbook.loft l ON l.user_id = u.id
         WHERE u.username = $1",
    )
    .bind(&username)
    .fetch_one(&pool)
    .await
    .expect("user and loft rows should both exist");

    let expected_lat = DmsCoordinate::parse("14:09:12.42 N").expect("valid latitude");
    let expected_lon = DmsCoordinate::parse("121:15:58.30 E").expect("valid longitude");
    assert!((latitude - expected_lat.decimal_degrees()).abs() < 1e-9);
    assert!((longitude - expected_lon.decimal_degrees()).abs() < 1e-9);
    assert_eq!(latitude_dms.as_deref(), Some("14:09:12.42 N"));
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_register_duplicate_username_conflict() {
    let client = client();
    let base = base_url();
    let username = unique_username("dup");

    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(&username))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    // Same username again, different details
    let mut payload = registration_json(&username);
    payload["email"] = Value::from("someone-else@example.com");
    let resp = client
        .post(format!("{base}/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send duplicate registration");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.expect("Failed to decode error");
    assert_eq!(body["error"], "Username already taken");

    // The unique constraint lets exactly one registration through
    let pool = test_pool().await;
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loftbook.user WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .expect("Failed to count users");
    assert_eq!(count, 1, "duplicate registration must not create a second row");
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_register_rejects_malformed_coordinates() {
    let client = client();
    let base = base_url();
    let bad_lat_user = unique_username("badlat");
    let bad_lon_user = unique_username("badlon");

    // Latitude missing its seconds segment
    let mut payload = registration_json(&bad_lat_user);
    payload["latitude_dms"] = Value::from("14:09 N");
    let resp = client
        .post(format!("{base}/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send registration");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to decode error");
    assert_eq!(body["error"], "Invalid latitude format");

    // Longitude with an unknown hemisphere letter
    let mut payload = registration_json(&bad_lon_user);
    payload["longitude_dms"] = Value::from("121:15:58.30 Q");
    let resp = client
        .post(format!("{base}/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send registration");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to decode error");
    assert_eq!(body["error"], "Invalid longitude format");

    // Coordinate validation happens before any write, so neither rejected
    // registration may leave a user row behind
    let pool = test_pool().await;
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM loftbook.user WHERE username = $1 OR username = $2",
    )
    .bind(&bad_lat_user)
    .bind(&bad_lon_user)
    .fetch_one(&pool)
    .await
    .expect("Failed to count users");
    assert_eq!(count, 0, "rejected registrations must not persist users");
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_register_rejects_blank_credentials() {
    let client = client();
    let base = base_url();

    let mut payload = registration_json(&unique_username("blank"));
    payload["password"] = Value::from("");
    let resp = client
        .post(format!("{base}/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to decode error");
    assert_eq!(body["error"], "Username and password are required");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_login_success_points_at_dashboard() {
    let client = client();
    let base = base_url();
    let username = unique_username("login");

    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(&username))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base}/login"))
        .json(&serde_json::json!({
            "username": username,
            "password": "correct horse battery staple",
        }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to decode login response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["redirect"], "/dashboard");
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_login_accepts_form_encoding() {
    let client = client();
    let base = base_url();
    let username = unique_username("form");

    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(&username))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    // The login page posts a form, not JSON
    let resp = client
        .post(format!("{base}/login"))
        .form(&[
            ("username", username.as_str()),
            ("password", "correct horse battery staple"),
        ])
        .send()
        .await
        .expect("Failed to log in with form body");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to decode login response");
    assert_eq!(body["redirect"], "/dashboard");
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_login_wrong_password_is_plain_text() {
    let client = client();
    let base = base_url();
    let username = unique_username("wrongpw");

    let resp = client
        .post(format!("{base}/register"))
        .json(&registration_json(&username))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base}/login"))
        .json(&serde_json::json!({
            "username": username,
            "password": "not the password",
        }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body, "Invalid username or password");
}

#[tokio::test]
#[ignore = "Requires running loftbook server"]
async fn test_login_unknown_username_matches_wrong_password() {
    let client = client();
    let base = base_url();

    // Never-registered username must produce the same answer as a wrong
    // password, so responses do not reveal which usernames exist.
    let resp = client
        .post(format!("{base}/login"))
        .json(&serde_json::json!({
            "username": unique_username("ghost"),
            "password": "anything",
        }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body, "Invalid username or password");
}
