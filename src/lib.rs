//! # gnosis-web
//!
//! Leptos + WASM frontend for the Gnosis learning platform: session handling
//! against the token API, validated signup forms with live availability
//! checks, and the lesson, quiz, and history screens.
//!
//! The crate builds for the browser as the `gnosis-web` binary; natively it
//! compiles against in-memory substitutes for browser storage and transport so
//! the state engines run under plain `cargo test`.

#[path = "lib/mod.rs"]
pub mod app_lib;

pub mod app;
pub mod components;
pub mod features;
pub mod routes;
