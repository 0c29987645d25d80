//! Session state and context for the frontend. The provider hydrates the
//! session once on mount: a stored token is decoded locally for expiry, then
//! confirmed against the server before any user data is trusted. Only the
//! account profile is kept in memory; the bearer token itself stays in
//! storage and is attached per-request by the HTTP pipeline.

use leptos::{prelude::*, task::spawn_local};

use crate::app_lib::{AppError, browser};
use crate::features::auth::{
    client, token,
    types::{RegisterRequest, RegisterResponse, User},
};

/// Session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    /// True while the initial session probe is still in flight.
    pub loading: RwSignal<bool>,
    /// Most recent login or registration failure, for display next to forms.
    pub last_error: RwSignal<Option<String>>,
    pub has_session: Signal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        let user = RwSignal::new(None::<User>);
        let loading = RwSignal::new(true);
        let last_error = RwSignal::new(None::<String>);
        let has_session = Signal::derive(move || user.get().is_some());
        Self {
            user,
            loading,
            last_error,
            has_session,
        }
    }

    /// Establishes the session state from storage, once, at startup. A token
    /// that is missing, expired, or undecodable never reaches the network; a
    /// live one is only trusted after the server confirms it.
    pub async fn bootstrap(&self) {
        self.loading.set(true);

        if let Some(stored) = browser::read_token() {
            let live = token::decode_claims(&stored)
                .map(|claims| !claims.is_expired(browser::now_epoch_seconds()))
                .unwrap_or(false);

            if live {
                match client::fetch_current_user().await {
                    Ok(user) => self.user.set(Some(user)),
                    Err(err) => {
                        log::warn!("Session probe failed: {err}");
                        browser::clear_token();
                        self.user.set(None);
                    }
                }
            } else {
                browser::clear_token();
                self.user.set(None);
            }
        } else {
            self.user.set(None);
        }

        self.loading.set(false);
    }

    /// Exchanges credentials for a session. On success the token is persisted
    /// and the account published; on failure only `last_error` changes.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), AppError> {
        self.last_error.set(None);

        match client::login(identifier, secret).await {
            Ok(response) => {
                browser::write_token(&response.token);
                self.user.set(Some(response.user));
                Ok(())
            }
            Err(err) => {
                self.last_error
                    .set(Some(err.user_message("Login failed. Please try again.")));
                Err(err)
            }
        }
    }

    /// Creates an account without establishing a session. Callers that want
    /// the new account signed in follow up with [`AuthContext::login`].
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, AppError> {
        self.last_error.set(None);

        match client::register(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                self.last_error
                    .set(Some(err.user_message("Registration failed. Please try again.")));
                Err(err)
            }
        }
    }

    /// Ends the session locally and hard-navigates to the login page. Safe to
    /// call with no session; the storage erase is idempotent.
    pub fn logout(&self) {
        browser::clear_token();
        self.user.set(None);
        self.last_error.set(None);
        browser::redirect_to_login();
    }

    /// Answers from storage, not from the in-memory signal, so a token
    /// removed in another tab is noticed on the next call.
    pub fn is_authenticated(&self) -> bool {
        let Some(stored) = browser::read_token() else {
            return false;
        };
        token::decode_claims(&stored)
            .map(|claims| !claims.is_expired(browser::now_epoch_seconds()))
            .unwrap_or(false)
    }
}

/// Provides the session context and hydrates it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    spawn_local(async move {
        auth.bootstrap().await;
    });

    view! { {children()} }
}

/// Returns the current session context or a detached empty one.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let auth = AuthContext::new();
        auth.loading.set(false);
        auth
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::api::test_transport;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    fn reset() {
        browser::reset_host_state();
        test_transport::reset();
    }

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"user_id":1}}"#));
        format!("{header}.{payload}.signature")
    }

    fn live_token() -> String {
        token_with_exp(browser::now_epoch_seconds() + 3_600)
    }

    fn ada_json() -> &'static str {
        r#"{"id": 1, "username": "ada", "email": "ada@example.com"}"#
    }

    #[tokio::test]
    async fn bootstrap_without_a_token_lands_unauthenticated() {
        reset();
        let auth = AuthContext::new();

        auth.bootstrap().await;

        assert_eq!(auth.user.get_untracked(), None);
        assert!(!auth.loading.get_untracked());
        assert!(test_transport::sent().is_empty());
        assert_eq!(browser::recorded_redirects(), 0);
    }

    #[tokio::test]
    async fn bootstrap_erases_an_expired_token_without_navigating() {
        reset();
        browser::write_token(&token_with_exp(browser::now_epoch_seconds() - 10));
        let auth = AuthContext::new();

        auth.bootstrap().await;

        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert!(test_transport::sent().is_empty());
        assert_eq!(browser::recorded_redirects(), 0);
    }

    #[tokio::test]
    async fn bootstrap_erases_an_undecodable_token_without_navigating() {
        reset();
        browser::write_token("not-a-token");
        let auth = AuthContext::new();

        auth.bootstrap().await;

        assert_eq!(browser::read_token(), None);
        assert!(test_transport::sent().is_empty());
        assert_eq!(browser::recorded_redirects(), 0);
    }

    #[tokio::test]
    async fn bootstrap_confirms_a_live_token_with_the_session_probe() {
        reset();
        let token = live_token();
        browser::write_token(&token);
        test_transport::enqueue_json(200, ada_json());
        let auth = AuthContext::new();

        auth.bootstrap().await;

        let user = auth.user.get_untracked().unwrap();
        assert_eq!(user.username, "ada");
        assert!(!auth.loading.get_untracked());

        let sent = test_transport::sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/api/auth/me");
        assert_eq!(
            sent[0].header("Authorization"),
            Some(format!("Bearer {token}").as_str())
        );
    }

    #[tokio::test]
    async fn bootstrap_drops_the_session_when_the_probe_fails() {
        reset();
        browser::write_token(&live_token());
        test_transport::enqueue(Err(AppError::Network("connection refused".to_string())));
        let auth = AuthContext::new();

        auth.bootstrap().await;

        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert_eq!(browser::recorded_redirects(), 0);
    }

    #[tokio::test]
    async fn bootstrap_redirects_once_when_the_server_rejects_the_token() {
        reset();
        browser::write_token(&live_token());
        test_transport::enqueue_json(401, r#"{"error": "Token has expired"}"#);
        let auth = AuthContext::new();

        auth.bootstrap().await;

        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert_eq!(browser::recorded_redirects(), 1);
    }

    #[tokio::test]
    async fn login_persists_the_token_and_publishes_the_user() {
        reset();
        let token = live_token();
        test_transport::enqueue_json(
            200,
            &format!(r#"{{"token": "{token}", "user": {}}}"#, ada_json()),
        );
        let auth = AuthContext::new();

        auth.login("ada", "Sup3r!secret").await.unwrap();

        assert_eq!(browser::read_token(), Some(token));
        assert_eq!(auth.user.get_untracked().unwrap().id, 1);
        assert!(auth.is_authenticated());
        assert_eq!(auth.last_error.get_untracked(), None);
    }

    #[tokio::test]
    async fn login_failure_surfaces_the_server_message() {
        reset();
        test_transport::enqueue_json(400, r#"{"error": "Invalid credentials"}"#);
        let auth = AuthContext::new();

        let result = auth.login("ada", "wrong").await;

        assert!(result.is_err());
        assert_eq!(
            auth.last_error.get_untracked().as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
    }

    #[tokio::test]
    async fn login_failure_without_a_body_falls_back_to_a_generic_message() {
        reset();
        test_transport::enqueue_json(500, "");
        let auth = AuthContext::new();

        let _ = auth.login("ada", "pw").await;

        assert_eq!(
            auth.last_error.get_untracked().as_deref(),
            Some("Login failed. Please try again.")
        );
    }

    #[tokio::test]
    async fn register_does_not_establish_a_session_even_with_a_token_in_the_response() {
        reset();
        let token = live_token();
        test_transport::enqueue_json(
            201,
            &format!(
                r#"{{"message": "Registration successful", "token": "{token}", "user": {}}}"#,
                ada_json()
            ),
        );
        let auth = AuthContext::new();

        let request = RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            secret: "Sup3r!secret".to_string(),
        };
        let response = auth.register(&request).await.unwrap();

        assert_eq!(response.message.as_deref(), Some("Registration successful"));
        assert_eq!(response.token, Some(token));
        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn logout_erases_the_session_and_navigates() {
        reset();
        browser::write_token(&live_token());
        let auth = AuthContext::new();
        auth.user.set(Some(User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            display_name: None,
            photo_url: None,
        }));

        auth.logout();

        assert_eq!(browser::read_token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert_eq!(browser::recorded_redirects(), 1);

        // Calling again with no session is harmless.
        auth.logout();
        assert_eq!(browser::read_token(), None);
        assert_eq!(browser::recorded_redirects(), 2);
    }

    #[tokio::test]
    async fn is_authenticated_reflects_stored_token_expiry() {
        reset();
        let auth = AuthContext::new();

        assert!(!auth.is_authenticated());

        browser::write_token(&token_with_exp(browser::now_epoch_seconds() - 10));
        assert!(!auth.is_authenticated());
        // The check itself never mutates storage.
        assert!(browser::read_token().is_some());

        browser::write_token("garbage");
        assert!(!auth.is_authenticated());

        browser::write_token(&live_token());
        assert!(auth.is_authenticated());
    }
}
