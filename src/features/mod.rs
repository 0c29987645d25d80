pub mod auth;
pub mod learning;
pub mod validation;
