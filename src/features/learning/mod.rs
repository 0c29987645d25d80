//! Lesson and quiz generation plus the saved search history. The generation
//! service itself is opaque to the client; everything here is request shaping.

pub mod client;
pub mod types;
