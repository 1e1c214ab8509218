//! Test fixtures for integration tests.

use std::sync::Arc;

use kaiwa_server::{
    domain::{DomainEvent, EventKind},
    server::{Repositories, build_app_state, create_router, default_event_dispatcher},
    usecase::{ChannelEventHandler, EventHandler},
};
use tokio::{
    net::TcpListener,
    sync::mpsc::{self, UnboundedReceiver},
    task::JoinHandle,
};

/// In-process server bound to an ephemeral port, backed by the in-memory repository.
///
/// Every published domain event is also forwarded to `events`.
pub struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
    pub events: UnboundedReceiver<DomainEvent>,
}

impl TestServer {
    pub async fn start() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let channel: Arc<dyn EventHandler> = Arc::new(ChannelEventHandler::new(tx));
        let mut events = default_event_dispatcher();
        for kind in EventKind::ALL {
            events.register_event(kind, [Arc::clone(&channel)]);
        }

        let state = build_app_state(Repositories::in_memory(), events)
            .expect("Failed to wire application state");
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
            events: rx,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
