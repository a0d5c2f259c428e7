//! Domain models and request/response records.
//!
//! Database row structs stay inside the `db` modules; everything here is
//! either a validated domain type or an explicit wire record for one of the
//! HTTP endpoints. Ad hoc JSON maps are not used.

pub mod audit;
pub mod clocking;
pub mod club;
pub mod datetime;
pub mod device;
pub mod loft;
pub mod pigeon;
pub mod race;
pub mod user;

use serde::Serialize;

/// Standard `{"message": ...}` success body used by the CRUD endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let body = serde_json::to_value(MessageResponse::new("Club created")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Club created"}));
    }
}
