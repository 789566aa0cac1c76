pub mod matches;
pub mod names;
pub mod sets;

pub use matches::{MatchViolation, validate_match};
pub use names::{NameViolation, validate_full_name};
pub use sets::{SetViolation, validate_set};
