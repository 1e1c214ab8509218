//! Domain event handlers.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::domain::{DomainEvent, EventKind};

use super::error::ApplicationError;

/// Acknowledgement returned by an event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutput {
    pub event_id: Uuid,
    pub kind: EventKind,
    pub handler: &'static str,
}

impl EventOutput {
    fn new(event: &DomainEvent, handler: &'static str) -> Self {
        Self {
            event_id: event.event_id(),
            kind: event.kind(),
            handler,
        }
    }
}

/// A handler registered on the event dispatcher for one or more [`EventKind`]s.
///
/// Delivery is at-least-once from the publisher's point of view, so handlers
/// should tolerate seeing the same `event_id` twice.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &DomainEvent) -> Result<EventOutput, ApplicationError>;
}

/// Writes every event to the tracing log.
pub struct LoggingEventHandler;

#[async_trait]
impl EventHandler for LoggingEventHandler {
    async fn handle(&self, event: &DomainEvent) -> Result<EventOutput, ApplicationError> {
        match event {
            DomainEvent::ChatCreated(e) => tracing::info!(
                event_id = %e.event_id(),
                chat_oid = e.chat_oid(),
                chat_title = e.chat_title(),
                "Chat created"
            ),
            DomainEvent::MessageReceived(e) => tracing::info!(
                event_id = %e.event_id(),
                chat_oid = e.chat_oid(),
                message_oid = e.message_oid(),
                "Message received"
            ),
        }
        Ok(EventOutput::new(event, "logging"))
    }
}

/// Forwards events to an in-process subscriber.
pub struct ChannelEventHandler {
    sender: UnboundedSender<DomainEvent>,
}

impl ChannelEventHandler {
    pub fn new(sender: UnboundedSender<DomainEvent>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl EventHandler for ChannelEventHandler {
    async fn handle(&self, event: &DomainEvent) -> Result<EventOutput, ApplicationError> {
        self.sender
            .send(event.clone())
            .map_err(|_| ApplicationError::EventChannelClosed)?;
        Ok(EventOutput::new(event, "channel"))
    }
}
