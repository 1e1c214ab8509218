//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Text validation error
    #[error("Text cannot be empty")]
    TextEmpty,

    /// Text too long error; `text` is the offending value cut to `max` characters
    #[error("Text cannot exceed {max} characters (got {actual}): {text}...")]
    TextTooLong {
        text: String,
        max: usize,
        actual: usize,
    },

    /// Title validation error
    #[error("Title cannot be empty")]
    TitleEmpty,

    /// Title too long error; `title` is the offending value cut to `max` characters
    #[error("Title cannot exceed {max} characters (got {actual}): {title}...")]
    TitleTooLong {
        title: String,
        max: usize,
        actual: usize,
    },
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The referenced chat does not exist in the store
    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    /// A stored document could not be turned back into an entity
    #[error("Corrupted chat document: {0}")]
    CorruptedDocument(String),

    /// Transport or connectivity failure reported by the store
    #[error("Storage error: {0}")]
    Storage(String),
}
