//! Repository traits.
//!
//! The domain layer defines the persistence boundary; the infrastructure
//! layer provides the implementations (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Chat, Message},
    error::RepositoryError,
};

/// Persistence of chats.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatsRepository: Send + Sync {
    /// Whether a chat with exactly this title is stored (case and whitespace sensitive).
    async fn check_exists_by_title(&self, title: &str) -> Result<bool, RepositoryError>;

    /// Load a chat with all of its messages. The returned entity has no pending events.
    async fn get_by_oid(&self, oid: &str) -> Result<Option<Chat>, RepositoryError>;

    /// Persist a newly created chat.
    async fn add(&self, chat: &Chat) -> Result<(), RepositoryError>;
}

/// Persistence of messages inside an existing chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagesRepository: Send + Sync {
    /// Append `message` to the stored chat.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ChatNotFound` if `chat_oid` is unknown.
    async fn add_message(&self, chat_oid: &str, message: &Message) -> Result<(), RepositoryError>;
}
