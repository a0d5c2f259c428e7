//! User domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{Role, UserId};

/// Registration request as posted to `/register`.
///
/// Every field defaults to empty so a missing key reads like a blank form
/// submission; validation happens in the auth service, not in the decoder.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    /// Latitude in DMS notation, e.g. `14:09:12.42 N`.
    #[serde(default)]
    pub latitude_dms: String,
    /// Longitude in DMS notation, e.g. `121:15:58.30 E`.
    #[serde(default)]
    pub longitude_dms: String,
}

/// Login request as posted to `/login`, as a form or as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Parameters for creating a member account together with its loft row.
///
/// Built by the auth service after credential validation, coordinate
/// normalization and password hashing; the repository inserts both rows in a
/// single transaction.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Raw latitude as entered, e.g. `14:09:12.42 N`.
    pub latitude_dms: String,
    /// Raw longitude as entered, e.g. `121:15:58.30 E`.
    pub longitude_dms: String,
}

/// A member row joined with the loft recorded at registration.
///
/// Members registered before loft capture was introduced have no loft row;
/// their coordinate fields are `null`.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithLoft {
    pub user_id: UserId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub latitude_dms: Option<String>,
    pub longitude_dms: Option<String>,
}

/// Body answered on successful login.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub redirect: &'static str,
}

impl LoginResponse {
    /// The fixed success payload; clients follow `redirect`.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: "success",
            message: "Login successful",
            redirect: "/dashboard",
        }
    }
}

/// Profile fields a member may update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_loft_wire_keys() {
        let user = UserWithLoft {
            user_id: UserId::new(1),
            username: "mara".to_string(),
            full_name: "Mara Santos".to_string(),
            email: "mara@example.com".to_string(),
            phone_number: "+63 912 555 0101".to_string(),
            role: Role::Member,
            created_at: "2025-05-17T06:30:00Z".parse().unwrap(),
            latitude_dms: Some("14:09:12.42 N".to_string()),
            longitude_dms: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["user_id"], 1);
        assert_eq!(value["role"], "member");
        assert_eq!(value["latitude_dms"], "14:09:12.42 N");
        assert!(value["longitude_dms"].is_null());
    }

    #[test]
    fn test_update_profile_defaults_missing_fields() {
        let update: UpdateProfile = serde_json::from_str(r#"{"email": "new@example.com"}"#).unwrap();
        assert_eq!(update.email, "new@example.com");
        assert_eq!(update.full_name, "");
        assert_eq!(update.phone_number, "");
    }

    #[test]
    fn test_registration_defaults_missing_fields() {
        let registration: Registration =
            serde_json::from_str(r#"{"username": "mara", "password": "hunter2"}"#).unwrap();
        assert_eq!(registration.username, "mara");
        assert_eq!(registration.password, "hunter2");
        assert_eq!(registration.latitude_dms, "");
        assert_eq!(registration.longitude_dms, "");
    }

    #[test]
    fn test_login_response_wire_shape() {
        let body = serde_json::to_value(LoginResponse::success()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "status": "success",
                "message": "Login successful",
                "redirect": "/dashboard",
            })
        );
    }
}
