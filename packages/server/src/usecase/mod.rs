//! UseCase 層
//!
//! コマンドとドメインイベントを Mediator 経由でハンドラに振り分けるレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod command;
pub mod create_chat;
pub mod create_message;
pub mod error;
pub mod event_handler;
pub mod mediator;

pub use command::{
    Command, CommandHandler, CommandKind, CommandOutput, CreateChatCommand, CreateMessageCommand,
};
pub use create_chat::CreateChatCommandHandler;
pub use create_message::CreateMessageCommandHandler;
pub use error::ApplicationError;
pub use event_handler::{ChannelEventHandler, EventHandler, EventOutput, LoggingEventHandler};
pub use mediator::{EventDispatcher, Mediator};
