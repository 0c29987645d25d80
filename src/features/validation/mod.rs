//! Live form validation: synchronous rule chains plus debounced, race-safe
//! server availability checks.

pub mod field;
pub mod rules;

pub use field::FieldState;
pub use rules::{FieldKind, FieldRules, PatternRule};
