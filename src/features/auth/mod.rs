//! Session lifecycle: token storage and decoding, the login and registration
//! clients, shared session signals, and the private-route guard.

pub mod client;
pub mod guards;
pub mod state;
pub mod token;
pub mod types;
