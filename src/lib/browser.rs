//! Thin adapter over the browser state the client persists or observes: the
//! stored bearer token, wall-clock time, and the hard navigation used when a
//! session ends. No policy lives here; callers decide when to read, write, or
//! redirect. Native builds substitute an in-memory token slot and a redirect
//! recorder so the state engines stay testable off-browser.

/// Storage key holding the raw bearer token; the only value this client persists.
const TOKEN_KEY: &str = "token";

/// Destination of the hard navigation after logout or session invalidation.
pub const LOGIN_PATH: &str = "/login";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Returns the persisted token, if one is present and non-empty.
#[cfg(target_arch = "wasm32")]
pub fn read_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Persists the token. Storage failures (private mode, quota) are ignored;
/// the session simply will not survive a reload.
#[cfg(target_arch = "wasm32")]
pub fn write_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Removes the persisted token. Clearing an absent token is a no-op.
#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Current wall-clock time as seconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_epoch_seconds() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Hard navigation to the login page. A full-page load resets every piece of
/// in-memory state, unlike a router transition.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

/// Steps back one entry in the session history.
#[cfg(target_arch = "wasm32")]
pub fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static TOKEN_SLOT: RefCell<Option<String>> = const { RefCell::new(None) };
    static REDIRECTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Returns the persisted token, if one is present and non-empty.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_token() -> Option<String> {
    TOKEN_SLOT
        .with(|slot| slot.borrow().clone())
        .filter(|token| !token.is_empty())
}

/// Persists the token in the in-memory slot.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_token(token: &str) {
    TOKEN_SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_string()));
}

/// Removes the persisted token. Clearing an absent token is a no-op.
#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {
    TOKEN_SLOT.with(|slot| *slot.borrow_mut() = None);
}

/// Current wall-clock time as seconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_epoch_seconds() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

/// Records the would-be navigation so tests can assert on it.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to_login() {
    REDIRECTS.with(|log| log.borrow_mut().push(LOGIN_PATH.to_string()));
}

/// No session history off-browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn history_back() {}

/// Number of hard redirects triggered on this thread since the last reset.
#[cfg(all(not(target_arch = "wasm32"), test))]
pub(crate) fn recorded_redirects() -> usize {
    REDIRECTS.with(|log| log.borrow().len())
}

/// Clears the in-memory token slot and the redirect log between tests.
#[cfg(all(not(target_arch = "wasm32"), test))]
pub(crate) fn reset_host_state() {
    TOKEN_SLOT.with(|slot| *slot.borrow_mut() = None);
    REDIRECTS.with(|log| log.borrow_mut().clear());
}
