//! Server wiring and run loop.
//!
//! Everything is constructed explicitly here at startup: the repository
//! implementation picked by configuration, the command handlers, the event
//! handlers and the mediator that routes between them.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::{RepositoryBackend, ServerConfig},
    domain::{ChatsRepository, EventKind, MessagesRepository, RepositoryError},
    infrastructure::repository::{InMemoryChatRepository, MongoChatRepository},
    ui::{handler, state::AppState},
    usecase::{
        ApplicationError, CommandHandler, CommandKind, CreateChatCommandHandler,
        CreateMessageCommandHandler, EventDispatcher, EventHandler, LoggingEventHandler, Mediator,
    },
};

use super::{error::ServerError, signal::shutdown_signal};

/// Repository trait objects shared by handlers and the read path.
pub struct Repositories {
    pub chats: Arc<dyn ChatsRepository>,
    pub messages: Arc<dyn MessagesRepository>,
}

impl Repositories {
    /// In-memory storage; both traits are served by the same store.
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryChatRepository::new());
        Self {
            chats: repository.clone(),
            messages: repository,
        }
    }
}

/// Build the repositories selected by `config.repository`.
pub async fn build_repositories(config: &ServerConfig) -> Result<Repositories, RepositoryError> {
    match config.repository {
        RepositoryBackend::Memory => {
            tracing::info!("Using in-memory repository");
            Ok(Repositories::in_memory())
        }
        RepositoryBackend::Mongodb => {
            tracing::info!("Using MongoDB repository");
            let repository = Arc::new(
                MongoChatRepository::connect(
                    &config.mongodb_uri,
                    &config.mongodb_database,
                    &config.mongodb_collection,
                    config.storage_timeout(),
                )
                .await?,
            );
            Ok(Repositories {
                chats: repository.clone(),
                messages: repository,
            })
        }
    }
}

/// Event dispatcher with the logging handler registered for every event kind.
pub fn default_event_dispatcher() -> EventDispatcher {
    let logging: Arc<dyn EventHandler> = Arc::new(LoggingEventHandler);
    let mut events = EventDispatcher::new();
    for kind in EventKind::ALL {
        events.register_event(kind, [Arc::clone(&logging)]);
    }
    events
}

/// Register the command handlers and check that nothing is left unrouted.
///
/// # Errors
///
/// Returns the wiring error from [`Mediator::ensure_registered`].
pub fn build_app_state(
    repositories: Repositories,
    events: EventDispatcher,
) -> Result<Arc<AppState>, ApplicationError> {
    let events = Arc::new(events);
    let mut mediator = Mediator::new(Arc::clone(&events));

    let create_chat: Arc<dyn CommandHandler> = Arc::new(CreateChatCommandHandler::new(
        Arc::clone(&repositories.chats),
        Arc::clone(&events),
    ));
    let create_message: Arc<dyn CommandHandler> = Arc::new(CreateMessageCommandHandler::new(
        Arc::clone(&repositories.chats),
        Arc::clone(&repositories.messages),
        Arc::clone(&events),
    ));
    mediator.register_command(CommandKind::CreateChat, [create_chat]);
    mediator.register_command(CommandKind::CreateMessage, [create_message]);
    mediator.ensure_registered()?;

    Ok(Arc::new(AppState {
        mediator: Arc::new(mediator),
        chats_repository: repositories.chats,
    }))
}

/// HTTP routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handler::create_chat))
        .route("/health", get(handler::health_check))
        .route("/{chat_oid}", get(handler::get_chat))
        .route("/{chat_oid}/messages", post(handler::create_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire everything from `config` and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repositories = build_repositories(&config).await?;
    let state = build_app_state(repositories, default_event_dispatcher())?;
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
