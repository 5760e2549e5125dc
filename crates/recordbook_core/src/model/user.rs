//! User record served by the REST surface.
//!
//! # Invariants
//! - `username` and `password` are required; `email` may be empty.
//! - Field widths mirror the `users` table (30/100/50 chars).

use super::{require_max_chars, require_non_empty, RecordId, ValidationError, UNSAVED_ID};
use serde::{Deserialize, Serialize};

pub const USERNAME_MAX_CHARS: usize = 30;
pub const PASSWORD_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 50;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// `0` until the record is inserted.
    #[serde(default)]
    pub id: RecordId,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Creates an unsaved user.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Whether the store has assigned an id to this user.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Checks field rules before any write reaches SQL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("username", &self.username)?;
        require_max_chars("username", &self.username, USERNAME_MAX_CHARS)?;
        require_non_empty("password", &self.password)?;
        require_max_chars("password", &self.password, PASSWORD_MAX_CHARS)?;
        require_max_chars("email", &self.email, EMAIL_MAX_CHARS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::User;
    use crate::model::ValidationError;

    #[test]
    fn new_user_is_unsaved() {
        let user = User::new("user1", "secret", "user@email.com");
        assert_eq!(user.id, 0);
        assert!(!user.is_persisted());
        user.validate().unwrap();
    }

    #[test]
    fn validate_rejects_blank_username() {
        let user = User::new("  ", "secret", "");
        assert_eq!(
            user.validate(),
            Err(ValidationError::Empty { field: "username" })
        );
    }

    #[test]
    fn validate_rejects_oversized_email() {
        let user = User::new("user1", "secret", "x".repeat(51));
        assert!(matches!(
            user.validate(),
            Err(ValidationError::TooLong { field: "email", .. })
        ));
    }

    #[test]
    fn json_without_id_or_email_decodes_as_unsaved() {
        let user: User = serde_json::from_str(r#"{"username":"a","password":"b"}"#).unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.email, "");
    }
}
