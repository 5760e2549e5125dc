//! Contact record managed by the console menu.
//!
//! # Invariants
//! - `name` and `phone` are required.
//! - `email` is nullable in storage; when set it must look like an address.

use super::{require_max_chars, require_non_empty, RecordId, ValidationError, UNSAVED_ID};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const PHONE_MAX_CHARS: usize = 30;

/// Display value for contacts stored without an email.
pub const MISSING_EMAIL_LABEL: &str = "No email";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Returns whether `value` has a plausible email shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// One row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: Option<String>, phone: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            email,
            phone: phone.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_max_chars("name", &self.name, NAME_MAX_CHARS)?;
        if let Some(email) = &self.email {
            require_max_chars("email", email, EMAIL_MAX_CHARS)?;
            if !is_valid_email(email) {
                return Err(ValidationError::Malformed {
                    field: "email",
                    value: email.clone(),
                });
            }
        }
        require_non_empty("phone", &self.phone)?;
        require_max_chars("phone", &self.phone, PHONE_MAX_CHARS)?;
        Ok(())
    }

    /// Email for display, falling back to `MISSING_EMAIL_LABEL`.
    pub fn email_or_placeholder(&self) -> &str {
        self.email.as_deref().unwrap_or(MISSING_EMAIL_LABEL)
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Phone: {}",
            self.id,
            self.name,
            self.email_or_placeholder(),
            self.phone
        )
    }
}
