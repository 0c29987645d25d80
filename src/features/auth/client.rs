//! Thin request helpers for the authentication endpoints. All session and
//! signal bookkeeping lives in [`super::state`]; these functions only shape
//! payloads and decode responses.

use crate::app_lib::{AppError, get_json, post_json};

use super::types::{
    AvailabilityKind, AvailabilityRequest, AvailabilityResponse, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse, User,
};

/// Exchanges credentials for a bearer token and the account it belongs to.
pub async fn login(identifier: &str, secret: &str) -> Result<LoginResponse, AppError> {
    let request = LoginRequest {
        identifier: identifier.to_string(),
        secret: secret.to_string(),
    };
    post_json("/api/auth/login", &request).await
}

/// Creates an account. The caller decides whether to log in afterwards.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json("/api/auth/register", request).await
}

/// Probes the current session; the bearer header is attached by the request
/// pipeline from storage. The server returns the user record flat.
pub async fn fetch_current_user() -> Result<User, AppError> {
    get_json("/api/auth/me").await
}

/// Asks the server whether a username or email is still free.
pub async fn check_availability(
    kind: AvailabilityKind,
    value: &str,
) -> Result<AvailabilityResponse, AppError> {
    let request = AvailabilityRequest {
        kind,
        value: value.to_string(),
    };
    post_json("/api/auth/check-availability", &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::api::test_transport;
    use crate::app_lib::browser;

    fn reset() {
        browser::reset_host_state();
        test_transport::reset();
    }

    #[tokio::test]
    async fn login_posts_identifier_and_secret() {
        reset();
        test_transport::enqueue_json(
            200,
            r#"{
                "token": "h.p.s",
                "user": {"id": 1, "username": "ada", "email": "ada@example.com"}
            }"#,
        );

        let response = login("ada", "Sup3r!secret").await.unwrap();
        assert_eq!(response.token, "h.p.s");
        assert_eq!(response.user.username, "ada");

        let sent = test_transport::sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, "POST");
        assert_eq!(sent[0].path, "/api/auth/login");
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"identifier":"ada","secret":"Sup3r!secret"}"#)
        );
    }

    #[tokio::test]
    async fn fetch_current_user_decodes_the_flat_record() {
        reset();
        browser::write_token("h.p.s");
        test_transport::enqueue_json(
            200,
            r#"{"id": 1, "username": "ada", "email": "ada@example.com", "last_login": null}"#,
        );

        let user = fetch_current_user().await.unwrap();
        assert_eq!(user.id, 1);

        let sent = test_transport::sent();
        assert_eq!(sent[0].path, "/api/auth/me");
        assert_eq!(sent[0].header("Authorization"), Some("Bearer h.p.s"));
    }

    #[tokio::test]
    async fn check_availability_tags_the_field_kind() {
        reset();
        test_transport::enqueue_json(200, r#"{"available": false, "message": "taken"}"#);

        let response = check_availability(AvailabilityKind::Email, "ada@example.com")
            .await
            .unwrap();
        assert!(!response.available);

        let sent = test_transport::sent();
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"type":"email","value":"ada@example.com"}"#)
        );
    }
}
