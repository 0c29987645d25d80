mod alert;
mod button;
mod quiz;
mod spinner;
mod text_field;

pub use alert::{Alert, AlertKind};
pub use button::Button;
pub use quiz::QuestionCard;
pub use spinner::Spinner;
pub use text_field::ValidatedField;
