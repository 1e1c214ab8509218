//! Domain events emitted by entities.
//!
//! Events are facts: every field is fixed at construction and only exposed
//! through getters. Each event carries its own UUID so handlers can
//! deduplicate redeliveries.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Type tag used by the mediator to route events to their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    ChatCreated,
    MessageReceived,
}

impl EventKind {
    /// Every event kind the domain can emit.
    pub const ALL: [EventKind; 2] = [EventKind::ChatCreated, EventKind::MessageReceived];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::ChatCreated => write!(f, "ChatCreated"),
            EventKind::MessageReceived => write!(f, "MessageReceived"),
        }
    }
}

/// A new chat has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCreatedEvent {
    event_id: Uuid,
    chat_oid: String,
    chat_title: String,
}

impl ChatCreatedEvent {
    pub fn new(chat_oid: String, chat_title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            chat_oid,
            chat_title,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn chat_oid(&self) -> &str {
        &self.chat_oid
    }

    pub fn chat_title(&self) -> &str {
        &self.chat_title
    }
}

/// A message has been appended to a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReceivedEvent {
    event_id: Uuid,
    message_text: String,
    message_oid: String,
    chat_oid: String,
}

impl MessageReceivedEvent {
    pub fn new(message_text: String, message_oid: String, chat_oid: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            message_text,
            message_oid,
            chat_oid,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    pub fn message_oid(&self) -> &str {
        &self.message_oid
    }

    pub fn chat_oid(&self) -> &str {
        &self.chat_oid
    }
}

/// Closed set of events the domain emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    ChatCreated(ChatCreatedEvent),
    MessageReceived(MessageReceivedEvent),
}

impl DomainEvent {
    /// Routing tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::ChatCreated(_) => EventKind::ChatCreated,
            DomainEvent::MessageReceived(_) => EventKind::MessageReceived,
        }
    }

    pub fn event_id(&self) -> Uuid {
        match self {
            DomainEvent::ChatCreated(event) => event.event_id(),
            DomainEvent::MessageReceived(event) => event.event_id(),
        }
    }
}

impl From<ChatCreatedEvent> for DomainEvent {
    fn from(event: ChatCreatedEvent) -> Self {
        DomainEvent::ChatCreated(event)
    }
}

impl From<MessageReceivedEvent> for DomainEvent {
    fn from(event: MessageReceivedEvent) -> Self {
        DomainEvent::MessageReceived(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_get_unique_ids() {
        // テスト項目: 同じ内容のイベントでも event_id は毎回異なる
        // when (操作):
        let event1 = ChatCreatedEvent::new("oid".to_string(), "title".to_string());
        let event2 = ChatCreatedEvent::new("oid".to_string(), "title".to_string());

        // then (期待する結果):
        assert_ne!(event1.event_id(), event2.event_id());
    }

    #[test]
    fn test_domain_event_kind() {
        // テスト項目: DomainEvent から種別タグを取得できる
        // given (前提条件):
        let created: DomainEvent =
            ChatCreatedEvent::new("chat".to_string(), "title".to_string()).into();
        let received: DomainEvent = MessageReceivedEvent::new(
            "hi".to_string(),
            "message".to_string(),
            "chat".to_string(),
        )
        .into();

        // then (期待する結果):
        assert_eq!(created.kind(), EventKind::ChatCreated);
        assert_eq!(received.kind(), EventKind::MessageReceived);
        assert_eq!(received.kind().to_string(), "MessageReceived");
    }

    #[test]
    fn test_domain_event_serializes_with_type_tag() {
        // テスト項目: JSON にシリアライズすると type タグが付与される
        // given (前提条件):
        let event: DomainEvent =
            ChatCreatedEvent::new("chat-1".to_string(), "lobby".to_string()).into();

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "chat_created");
        assert_eq!(json["chat_oid"], "chat-1");
        assert_eq!(json["chat_title"], "lobby");
    }
}
