//! Error types for the storage layer.

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by repository operations.
///
/// This is a closed enumeration: the HTTP layer matches on it exhaustively
/// to pick a status code, so new variants require a translator update.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document matched the given id.
    #[error("not found")]
    NotFound,

    /// The id is not a syntactically valid identifier for the store.
    #[error("malformatted id: {0}")]
    InvalidId(String),

    /// Store-layer validation rejected the input. The message is part of
    /// the client contract and passes through to the response verbatim.
    #[error("{0}")]
    Validation(String),

    /// Anything the database reported that we do not classify.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Validation message for a missing or empty note content.
    pub(crate) fn content_missing() -> Self {
        StoreError::Validation("content missing".to_string())
    }

    /// Validation message for a missing or empty username.
    pub(crate) fn username_missing() -> Self {
        StoreError::Validation("username missing".to_string())
    }

    /// Validation message for a duplicate username.
    pub(crate) fn username_taken() -> Self {
        StoreError::Validation("expected `username` to be unique".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = StoreError::Validation("content missing".to_string());
        assert_eq!(err.to_string(), "content missing");
    }

    #[test]
    fn test_username_taken_message() {
        let err = StoreError::username_taken();
        assert!(err.to_string().contains("expected `username` to be unique"));
    }

    #[test]
    fn test_invalid_id_keeps_offending_input() {
        let err = StoreError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "malformatted id: abc");
    }
}
