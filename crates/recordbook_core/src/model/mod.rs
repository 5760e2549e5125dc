//! Domain records persisted by recordbook.
//!
//! # Responsibility
//! - Define the flat records mapped to store rows (`User`, `Contact`).
//! - Own field validation shared by every write path.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; the store assigns ids on insert.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod contact;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned record identifier.
pub type RecordId = i64;

/// Identifier value of a record that has not been inserted yet.
pub const UNSAVED_ID: RecordId = 0;

/// Field-level validation failure for any record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty after trimming.
    Empty { field: &'static str },
    /// Field exceeds the column width declared in the schema.
    TooLong { field: &'static str, max_chars: usize },
    /// Field is present but malformed.
    Malformed { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} cannot be empty"),
            Self::TooLong { field, max_chars } => {
                write!(f, "{field} must be at most {max_chars} characters")
            }
            Self::Malformed { field, value } => write!(f, "invalid {field}: `{value}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub(crate) fn require_max_chars(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max_chars {
        return Err(ValidationError::TooLong { field, max_chars });
    }
    Ok(())
}
