//! Shared frontend utilities for API access, configuration, errors, and
//! browser integration.
//!
//! ## Session handling
//!
//! 1. **Persist:** A successful login stores the bearer token under a single
//!    well-known local storage key.
//! 2. **Attach:** Every outgoing request passes through the request pipeline
//!    in [`api`], which injects the token as an `Authorization: Bearer`
//!    header when one is stored.
//! 3. **Invalidate:** A `401` response erases the stored token and
//!    hard-navigates to the login page, at most once per originating request.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Tokens pass through here on every
//! request, so callers must avoid logging header contents.

pub mod api;
pub mod browser;
pub mod config;
pub mod errors;

pub const GIT_COMMIT_HASH: &str = env!("GNOSIS_WEB_GIT_SHA");

pub use api::{delete_json, get_json, post_json};
pub use errors::AppError;
