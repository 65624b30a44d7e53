//! Row and input models for the notes and users tables.

use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NoteRow {
    /// Store-generated identifier, immutable after creation.
    pub id: Uuid,
    /// The note text. Never empty.
    pub content: String,
    /// Importance flag.
    pub important: bool,
}

/// A registered user.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    /// Optional display name.
    pub name: Option<String>,
    /// PHC-format password hash. Must never reach a client response.
    pub password_hash: String,
}

/// Input for inserting or updating a note.
///
/// Fields are optional so that validation happens here, at the store layer,
/// with the contractual error messages, rather than in the JSON layer.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl NewNote {
    pub fn new(content: Option<String>, important: Option<bool>) -> Self {
        Self { content, important }
    }

    /// Check the required fields and apply defaults.
    ///
    /// Returns the content and the importance flag (false when omitted).
    pub(crate) fn validate(&self) -> StoreResult<(&str, bool)> {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => {
                Ok((content, self.important.unwrap_or(false)))
            }
            _ => Err(StoreError::content_missing()),
        }
    }
}

/// Input for registering a user. The password is hashed by the caller;
/// plaintext never enters this crate.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: Option<String>, name: Option<String>, password_hash: String) -> Self {
        Self {
            username,
            name,
            password_hash,
        }
    }

    pub(crate) fn validate(&self) -> StoreResult<&str> {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => Ok(username),
            _ => Err(StoreError::username_missing()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_defaults_important_to_false() {
        let note = NewNote::new(Some("HTML is easy".to_string()), None);
        let (content, important) = note.validate().unwrap();
        assert_eq!(content, "HTML is easy");
        assert!(!important);
    }

    #[test]
    fn test_new_note_keeps_important_flag() {
        let note = NewNote::new(Some("x".to_string()), Some(true));
        let (_, important) = note.validate().unwrap();
        assert!(important);
    }

    #[test]
    fn test_new_note_missing_content() {
        let note = NewNote::new(None, Some(true));
        let err = note.validate().unwrap_err();
        assert_eq!(err.to_string(), "content missing");
    }

    #[test]
    fn test_new_note_empty_content() {
        // Empty string counts as missing, matching falsy-content semantics
        let note = NewNote::new(Some(String::new()), None);
        let err = note.validate().unwrap_err();
        assert_eq!(err.to_string(), "content missing");
    }

    #[test]
    fn test_new_user_missing_username() {
        let user = NewUser::new(None, None, "$argon2id$...".to_string());
        let err = user.validate().unwrap_err();
        assert_eq!(err.to_string(), "username missing");
    }

    #[test]
    fn test_new_user_valid() {
        let user = NewUser::new(
            Some("root".to_string()),
            Some("Superuser".to_string()),
            "$argon2id$...".to_string(),
        );
        assert_eq!(user.validate().unwrap(), "root");
    }
}
