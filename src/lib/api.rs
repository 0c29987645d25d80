//! HTTP plumbing shared by every feature client. Requests are JSON-only and
//! pass through an explicit ordered pair of interceptor pipelines: the request
//! phase attaches the JSON headers and the bearer credential read from
//! storage, the response phase watches for an authorization failure and
//! invalidates the persisted session exactly once per originating request.
//! Network-level failures (no response at all) bypass the response phase;
//! they must never clear a session.

use super::{browser, errors::AppError};
#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
use serde::{Serialize, de::DeserializeOwned};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// HTTP methods this client actually sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Wire name, recorded by the host test transport. Browser dispatch
    /// matches the variants directly instead.
    #[cfg(all(not(target_arch = "wasm32"), test))]
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing request, as seen by the interceptor pipelines.
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    /// Set once the unauthorized handler has fired for this request, so
    /// invalidation can never run twice for one originating request.
    pub retried: bool,
}

impl ApiRequest {
    /// A GET request for the given API path.
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: None,
            headers: Vec::new(),
            retried: false,
        }
    }

    /// A POST request carrying the payload encoded as JSON.
    pub fn post<B: Serialize>(path: &str, body: &B) -> Result<Self, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        Ok(Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(payload),
            headers: Vec::new(),
            retried: false,
        })
    }

    /// A DELETE request for the given API path.
    pub fn delete(path: &str) -> Self {
        Self {
            method: Method::Delete,
            path: path.to_string(),
            body: None,
            headers: Vec::new(),
            retried: false,
        }
    }
}

/// One settled response, as seen by the response pipeline.
#[derive(Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

type RequestTransform = fn(&mut ApiRequest);
type ResponseTransform = fn(&mut ApiRequest, &ApiResponse);

/// Request-phase interceptors, applied in order to every outgoing request.
const REQUEST_PIPELINE: &[RequestTransform] = &[attach_json_headers, attach_bearer_token];

/// Response-phase interceptors, applied in order to every settled response.
const RESPONSE_PIPELINE: &[ResponseTransform] = &[invalidate_on_unauthorized];

fn attach_json_headers(request: &mut ApiRequest) {
    request
        .headers
        .push(("Content-Type".to_string(), "application/json".to_string()));
    request
        .headers
        .push(("Accept".to_string(), "application/json".to_string()));
}

/// Attaches the stored token as a bearer credential. Applies to every request
/// without a per-route opt-out; requests sent while logged out simply carry
/// no Authorization header.
fn attach_bearer_token(request: &mut ApiRequest) {
    if let Some(token) = browser::read_token() {
        request
            .headers
            .push(("Authorization".to_string(), format!("Bearer {token}")));
    }
}

/// Erases the persisted token and hard-navigates to the login page when the
/// server reports an authorization failure. The flag on the request keeps the
/// invalidation to exactly one trigger per originating request.
fn invalidate_on_unauthorized(request: &mut ApiRequest, response: &ApiResponse) {
    if response.status == 401 && !request.retried {
        request.retried = true;
        browser::clear_token();
        browser::redirect_to_login();
    }
}

/// Sends one request through both pipelines. Non-2xx statuses become
/// `AppError::Http` carrying the server's message so call sites can still
/// show it even when invalidation already scheduled a navigation.
pub async fn send(mut request: ApiRequest) -> Result<ApiResponse, AppError> {
    for transform in REQUEST_PIPELINE {
        transform(&mut request);
    }

    let response = dispatch(&request).await?;

    for transform in RESPONSE_PIPELINE {
        transform(&mut request, &response);
    }

    into_result(response)
}

/// Fetches JSON from the given path.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = send(ApiRequest::get(path)).await?;
    decode_body(&response)
}

/// Posts a JSON body and decodes a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send(ApiRequest::post(path, body)?).await?;
    decode_body(&response)
}

/// Sends a DELETE and decodes a JSON response.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = send(ApiRequest::delete(path)).await?;
    decode_body(&response)
}

fn into_result(response: ApiResponse) -> Result<ApiResponse, AppError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(AppError::Http {
            status: response.status,
            message: error_message(&response.body),
        })
    }
}

fn decode_body<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, AppError> {
    serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Extracts the server's `{"error": ...}` message from an error body,
/// falling back to the sanitized raw body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|field| field.as_str()) {
            return message.to_string();
        }
    }
    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

/// Joins a base origin and a path without doubling or dropping slashes. An
/// empty base leaves the path relative, for same-origin deployments.
#[cfg(any(target_arch = "wasm32", test))]
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sends the request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn dispatch(request: &ApiRequest) -> Result<ApiResponse, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let url = build_url(&request.path);
    let mut builder = match request.method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };
    builder = builder.abort_signal(Some(&signal));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let ready = match &request.body {
        Some(body) => builder.body(body.clone()),
        None => builder.build(),
    }
    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = ready.send().await.map_err(map_request_error)?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(ApiResponse { status, body })
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn dispatch(request: &ApiRequest) -> Result<ApiResponse, AppError> {
    #[cfg(test)]
    {
        test_transport::dispatch(request).await
    }
    #[cfg(not(test))]
    {
        let _ = request;
        Err(AppError::Network(
            "HTTP transport is only available in the browser.".to_string(),
        ))
    }
}

/// Scriptable stand-in for the browser transport, used by host tests. Queued
/// results settle in dispatch order and every dispatched request is recorded
/// for assertions. A deferred entry yields once before settling, which lets a
/// test overlap two in-flight requests on one thread.
#[cfg(all(not(target_arch = "wasm32"), test))]
pub(crate) mod test_transport {
    use super::{ApiRequest, ApiResponse, AppError};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// A dispatched request captured for assertions.
    #[derive(Clone, Debug)]
    pub(crate) struct SentRequest {
        pub(crate) method: &'static str,
        pub(crate) path: String,
        pub(crate) body: Option<String>,
        pub(crate) headers: Vec<(String, String)>,
    }

    impl SentRequest {
        pub(crate) fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(header, _)| header == name)
                .map(|(_, value)| value.as_str())
        }
    }

    enum Scripted {
        Ready(Result<ApiResponse, AppError>),
        Deferred(Result<ApiResponse, AppError>),
    }

    thread_local! {
        static SCRIPT: RefCell<VecDeque<Scripted>> = const { RefCell::new(VecDeque::new()) };
        static SENT: RefCell<Vec<SentRequest>> = const { RefCell::new(Vec::new()) };
    }

    pub(crate) fn enqueue(result: Result<ApiResponse, AppError>) {
        SCRIPT.with(|script| script.borrow_mut().push_back(Scripted::Ready(result)));
    }

    pub(crate) fn enqueue_json(status: u16, body: &str) {
        enqueue(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Settles only after yielding back to the executor once.
    pub(crate) fn enqueue_deferred_json(status: u16, body: &str) {
        SCRIPT.with(|script| {
            script.borrow_mut().push_back(Scripted::Deferred(Ok(ApiResponse {
                status,
                body: body.to_string(),
            })));
        });
    }

    pub(crate) fn sent() -> Vec<SentRequest> {
        SENT.with(|sent| sent.borrow().clone())
    }

    pub(crate) fn reset() {
        SCRIPT.with(|script| script.borrow_mut().clear());
        SENT.with(|sent| sent.borrow_mut().clear());
    }

    pub(crate) async fn dispatch(request: &ApiRequest) -> Result<ApiResponse, AppError> {
        SENT.with(|sent| {
            sent.borrow_mut().push(SentRequest {
                method: request.method.as_str(),
                path: request.path.clone(),
                body: request.body.clone(),
                headers: request.headers.clone(),
            });
        });

        let scripted = SCRIPT.with(|script| script.borrow_mut().pop_front());
        match scripted {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(result)) => {
                tokio::task::yield_now().await;
                result
            }
            None => Err(AppError::Network("no scripted response".to_string())),
        }
    }
}
