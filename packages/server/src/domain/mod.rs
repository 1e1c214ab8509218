//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Chat, Message};
pub use error::{RepositoryError, ValueObjectError};
pub use event::{ChatCreatedEvent, DomainEvent, EventKind, MessageReceivedEvent};
pub use factory::EntityIdFactory;
pub use repository::{ChatsRepository, MessagesRepository};
pub use value_object::{Text, Timestamp, Title};
