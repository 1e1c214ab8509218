//! Mediator: routes commands and domain events to their handlers.
//!
//! Both routing tables are filled once during process wiring and then shared
//! read-only. Handlers for one dispatch always run one after another, in
//! registration order; the first failure aborts the rest of the dispatch.
//!
//! Event routing lives in its own [`EventDispatcher`] so that command
//! handlers can hold it and flush entity events after a successful write.

use std::{collections::HashMap, sync::Arc};

use crate::domain::{DomainEvent, EventKind};

use super::{
    command::{Command, CommandHandler, CommandKind, CommandOutput},
    error::ApplicationError,
    event_handler::{EventHandler, EventOutput},
};

/// Routing table from event kinds to event handlers.
#[derive(Default)]
pub struct EventDispatcher {
    events_map: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handlers` to the list for `kind`. Earlier registrations are kept.
    pub fn register_event<I>(&mut self, kind: EventKind, handlers: I)
    where
        I: IntoIterator<Item = Arc<dyn EventHandler>>,
    {
        self.events_map.entry(kind).or_default().extend(handlers);
    }

    /// Publish `events` in order and collect every handler result into one list.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::EventHandlersNotRegistered` before running
    /// any handler if one of the events has no handler. Otherwise the first
    /// handler failure is returned.
    pub async fn publish_event(
        &self,
        events: &[DomainEvent],
    ) -> Result<Vec<EventOutput>, ApplicationError> {
        let mut routed = Vec::with_capacity(events.len());
        for event in events {
            let handlers = self
                .handlers_for(event.kind())
                .ok_or(ApplicationError::EventHandlersNotRegistered(event.kind()))?;
            routed.push((event, handlers));
        }

        let mut results = Vec::new();
        for (event, handlers) in routed {
            tracing::debug!(
                event_id = %event.event_id(),
                kind = %event.kind(),
                handlers = handlers.len(),
                "Publishing event"
            );
            for handler in handlers {
                results.push(handler.handle(event).await?);
            }
        }
        Ok(results)
    }

    /// Fail if any event kind the domain emits has no handler.
    pub fn ensure_registered(&self) -> Result<(), ApplicationError> {
        EventKind::ALL
            .into_iter()
            .find(|kind| self.handlers_for(*kind).is_none())
            .map_or(Ok(()), |kind| {
                Err(ApplicationError::EventHandlersNotRegistered(kind))
            })
    }

    fn handlers_for(&self, kind: EventKind) -> Option<&[Arc<dyn EventHandler>]> {
        self.events_map
            .get(&kind)
            .map(Vec::as_slice)
            .filter(|handlers| !handlers.is_empty())
    }
}

/// Routing table from command kinds to command handlers, plus the event dispatcher.
pub struct Mediator {
    commands_map: HashMap<CommandKind, Vec<Arc<dyn CommandHandler>>>,
    events: Arc<EventDispatcher>,
}

impl Mediator {
    /// Create a mediator with no command handlers.
    pub fn new(events: Arc<EventDispatcher>) -> Self {
        Self {
            commands_map: HashMap::new(),
            events,
        }
    }

    /// Append `handlers` to the list for `kind`. Earlier registrations are kept.
    pub fn register_command<I>(&mut self, kind: CommandKind, handlers: I)
    where
        I: IntoIterator<Item = Arc<dyn CommandHandler>>,
    {
        self.commands_map.entry(kind).or_default().extend(handlers);
    }

    /// Run every handler registered for the command's kind and return their results in order.
    ///
    /// # Errors
    ///
    /// * `ApplicationError::CommandHandlersNotRegistered` - no handler for this kind
    /// * the first error returned by a handler; later handlers are not run
    pub async fn handle_command(
        &self,
        command: impl Into<Command>,
    ) -> Result<Vec<CommandOutput>, ApplicationError> {
        let command = command.into();
        let kind = command.kind();
        let handlers = self
            .commands_map
            .get(&kind)
            .filter(|handlers| !handlers.is_empty())
            .ok_or(ApplicationError::CommandHandlersNotRegistered(kind))?;

        tracing::debug!(%kind, handlers = handlers.len(), "Dispatching command");

        let mut results = Vec::with_capacity(handlers.len());
        for handler in handlers {
            results.push(handler.handle(&command).await?);
        }
        Ok(results)
    }

    /// See [`EventDispatcher::publish_event`].
    pub async fn publish_event(
        &self,
        events: &[DomainEvent],
    ) -> Result<Vec<EventOutput>, ApplicationError> {
        self.events.publish_event(events).await
    }

    /// Startup check: every command kind and every event kind has a handler.
    pub fn ensure_registered(&self) -> Result<(), ApplicationError> {
        if let Some(kind) = CommandKind::ALL.into_iter().find(|kind| {
            self.commands_map
                .get(kind)
                .is_none_or(|handlers| handlers.is_empty())
        }) {
            return Err(ApplicationError::CommandHandlersNotRegistered(kind));
        }
        self.events.ensure_registered()
    }

    /// Shared event dispatcher, handed to command handlers at wiring time.
    pub fn events(&self) -> Arc<EventDispatcher> {
        Arc::clone(&self.events)
    }
}
