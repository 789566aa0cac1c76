use thiserror::Error;

use crate::validation::{MatchViolation, NameViolation};

/// User-correctable failures. Travels inside `anyhow::Error`; use
/// `downcast_ref::<LedgerError>()` to tell it apart from storage failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid match: {0}")]
    InvalidMatch(#[from] MatchViolation),

    #[error(transparent)]
    InvalidName(#[from] NameViolation),

    #[error("A player named {name} already exists")]
    DuplicatePlayer { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}

/// Add context to store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} store key: {}", operation, key)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
