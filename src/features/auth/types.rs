//! Wire types for the authentication endpoints. Field names follow the
//! server's JSON contract, so several fields carry serde renames.

use serde::{Deserialize, Serialize};

/// The authenticated account, as returned by login and the session probe.
/// The probe returns this record flat, without an envelope.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Login accepts a username or an email address in one field.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub secret: String,
}

/// Registration does not establish a session on its own, even though the
/// server echoes a token; callers decide whether to log the account in.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Which unique field an availability query asks about.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityKind {
    Username,
    Email,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AvailabilityRequest {
    #[serde(rename = "type")]
    pub kind: AvailabilityKind,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub available: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_server_field_names() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "username": "ada",
                "email": "ada@example.com",
                "displayName": "Ada L.",
                "photoURL": "https://cdn.example.com/ada.png"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.display_name.as_deref(), Some("Ada L."));
        assert_eq!(user.photo_url.as_deref(), Some("https://cdn.example.com/ada.png"));
    }

    #[test]
    fn user_tolerates_extra_fields_and_missing_profile_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 2,
                "username": "brin",
                "email": "brin@example.com",
                "last_login": "2026-08-20T10:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(user.display_name, None);
        assert_eq!(user.photo_url, None);
    }

    #[test]
    fn register_response_token_is_ignored_when_absent() {
        let response: RegisterResponse =
            serde_json::from_str(r#"{"message": "Registration successful"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("Registration successful"));
        assert_eq!(response.token, None);
        assert_eq!(response.user, None);
    }

    #[test]
    fn availability_request_serializes_kind_as_type() {
        let request = AvailabilityRequest {
            kind: AvailabilityKind::Username,
            value: "ada".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"type":"username","value":"ada"}"#
        );
    }

    #[test]
    fn availability_response_message_defaults_to_none() {
        let response: AvailabilityResponse =
            serde_json::from_str(r#"{"available": true}"#).unwrap();
        assert!(response.available);
        assert_eq!(response.message, None);

        let taken: AvailabilityResponse = serde_json::from_str(
            r#"{"available": false, "message": "Username is already taken"}"#,
        )
        .unwrap();
        assert!(!taken.available);
        assert_eq!(taken.message.as_deref(), Some("Username is already taken"));
    }
}
