//! Core domain models for the chat application.
//!
//! Entities own a private buffer of pending [`DomainEvent`]s. Mutators append
//! to it; the orchestration layer drains it with `pull_events` once the
//! change has been persisted.

use super::{
    event::{ChatCreatedEvent, DomainEvent, MessageReceivedEvent},
    factory::EntityIdFactory,
    value_object::{Text, Timestamp, Title},
};

/// Identity, creation time and pending events shared by every entity.
#[derive(Debug, Clone)]
struct EntityBase {
    oid: String,
    created_at: Timestamp,
    events: Vec<DomainEvent>,
}

impl EntityBase {
    fn new() -> Self {
        Self::restore(EntityIdFactory::generate(), Timestamp::now())
    }

    fn restore(oid: String, created_at: Timestamp) -> Self {
        Self {
            oid,
            created_at,
            events: Vec::new(),
        }
    }

    fn register_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn pull_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Represents a chat message in the domain model
#[derive(Debug, Clone)]
pub struct Message {
    base: EntityBase,
    text: Text,
}

impl Message {
    /// Create a new message with a fresh identity
    pub fn new(text: Text) -> Self {
        Self {
            base: EntityBase::new(),
            text,
        }
    }

    /// Rebuild a message loaded from storage
    pub fn restore(oid: String, text: Text, created_at: Timestamp) -> Self {
        Self {
            base: EntityBase::restore(oid, created_at),
            text,
        }
    }

    pub fn oid(&self) -> &str {
        &self.base.oid
    }

    pub fn created_at(&self) -> Timestamp {
        self.base.created_at
    }

    pub fn text(&self) -> &Text {
        &self.text
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.base.oid == other.base.oid
    }
}

impl Eq for Message {}

/// Represents a chat with its message history
#[derive(Debug, Clone)]
pub struct Chat {
    base: EntityBase,
    title: Title,
    messages: Vec<Message>,
}

impl Chat {
    /// Build a chat without emitting any event.
    ///
    /// Use [`Chat::create_chat`] for new chats; this constructor is meant for
    /// fixtures that pre-seed a repository.
    pub fn new(title: Title) -> Self {
        Self {
            base: EntityBase::new(),
            title,
            messages: Vec::new(),
        }
    }

    /// Rebuild a chat loaded from storage. The event buffer starts empty.
    pub fn restore(
        oid: String,
        title: Title,
        created_at: Timestamp,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            base: EntityBase::restore(oid, created_at),
            title,
            messages,
        }
    }

    /// Create a new chat and register a `ChatCreated` event
    pub fn create_chat(title: Title) -> Self {
        let mut chat = Self::new(title);
        let event = ChatCreatedEvent::new(
            chat.oid().to_string(),
            chat.title.as_generic_type().to_string(),
        );
        chat.register_event(event.into());
        chat
    }

    /// Append a message and register a `MessageReceived` event
    pub fn add_message(&mut self, message: Message) {
        let event = MessageReceivedEvent::new(
            message.text().as_generic_type().to_string(),
            message.oid().to_string(),
            self.oid().to_string(),
        );
        self.messages.push(message);
        self.register_event(event.into());
    }

    pub fn oid(&self) -> &str {
        &self.base.oid
    }

    pub fn created_at(&self) -> Timestamp {
        self.base.created_at
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub(crate) fn register_event(&mut self, event: DomainEvent) {
        self.base.register_event(event);
    }

    /// Drain pending events. A second call returns an empty list.
    pub fn pull_events(&mut self) -> Vec<DomainEvent> {
        self.base.pull_events()
    }
}

impl PartialEq for Chat {
    fn eq(&self, other: &Self) -> bool {
        self.base.oid == other.base.oid
    }
}

impl Eq for Chat {}
