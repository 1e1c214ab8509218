//! Commands and the command handler contract.
//!
//! Commands form a closed set: the mediator routes on [`CommandKind`], a plain
//! type tag, and each handler unpacks the variant it was registered for.

use async_trait::async_trait;
use std::fmt;

use crate::domain::{Chat, Message};

use super::error::ApplicationError;

/// Create a chat with the given title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChatCommand {
    pub title: String,
}

/// Append a message to an existing chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageCommand {
    pub chat_oid: String,
    pub text: String,
}

/// Type tag used by the mediator to route commands to their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateChat,
    CreateMessage,
}

impl CommandKind {
    /// Every command kind the application accepts.
    pub const ALL: [CommandKind; 2] = [CommandKind::CreateChat, CommandKind::CreateMessage];
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::CreateChat => write!(f, "CreateChat"),
            CommandKind::CreateMessage => write!(f, "CreateMessage"),
        }
    }
}

/// Closed set of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateChat(CreateChatCommand),
    CreateMessage(CreateMessageCommand),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::CreateChat(_) => CommandKind::CreateChat,
            Command::CreateMessage(_) => CommandKind::CreateMessage,
        }
    }
}

impl From<CreateChatCommand> for Command {
    fn from(command: CreateChatCommand) -> Self {
        Command::CreateChat(command)
    }
}

impl From<CreateMessageCommand> for Command {
    fn from(command: CreateMessageCommand) -> Self {
        Command::CreateMessage(command)
    }
}

/// Result produced by a command handler.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    Chat(Chat),
    Message(Message),
}

impl CommandOutput {
    pub fn into_chat(self) -> Option<Chat> {
        match self {
            CommandOutput::Chat(chat) => Some(chat),
            CommandOutput::Message(_) => None,
        }
    }

    pub fn into_message(self) -> Option<Message> {
        match self {
            CommandOutput::Message(message) => Some(message),
            CommandOutput::Chat(_) => None,
        }
    }
}

/// A handler registered on the mediator for one [`CommandKind`].
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handle `command`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnexpectedCommand` when given a command of
    /// a kind the handler does not process.
    async fn handle(&self, command: &Command) -> Result<CommandOutput, ApplicationError>;
}
