//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{EventKind, RepositoryError, ValueObjectError};

use super::command::CommandKind;

/// Errors surfaced by the mediator and the command/event handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Empty or over-length text/title
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// A chat with the requested title already exists
    #[error("Chat with title '{0}' already exists")]
    DuplicateTitle(String),

    /// The referenced chat does not exist
    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    /// Wiring defect: no handler for this command kind
    #[error("No command handlers registered for {0}")]
    CommandHandlersNotRegistered(CommandKind),

    /// Wiring defect: no handler for this event kind
    #[error("No event handlers registered for {0}")]
    EventHandlersNotRegistered(EventKind),

    /// Wiring defect: a handler was registered under the wrong command kind
    #[error("Handler cannot process command {0}")]
    UnexpectedCommand(CommandKind),

    /// The receiving side of an event channel has been dropped
    #[error("Event channel closed")]
    EventChannelClosed,

    /// Storage failure, propagated unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// Stable machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_) => "validation_error",
            ApplicationError::DuplicateTitle(_) => "duplicate_title",
            ApplicationError::ChatNotFound(_) => "chat_not_found",
            ApplicationError::CommandHandlersNotRegistered(_) => "command_handlers_not_registered",
            ApplicationError::EventHandlersNotRegistered(_) => "event_handlers_not_registered",
            ApplicationError::UnexpectedCommand(_) => "unexpected_command",
            ApplicationError::EventChannelClosed => "event_channel_closed",
            ApplicationError::Repository(_) => "storage_error",
        }
    }

    /// Whether the caller's input caused the failure (as opposed to wiring or storage).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApplicationError::Validation(_)
                | ApplicationError::DuplicateTitle(_)
                | ApplicationError::ChatNotFound(_)
        )
    }
}
