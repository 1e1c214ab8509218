//! Server state shared by the HTTP handlers.

use std::sync::Arc;

use crate::{domain::ChatsRepository, usecase::Mediator};

/// Shared application state
pub struct AppState {
    /// Command/event routing (write path)
    pub mediator: Arc<Mediator>,
    /// Repository（読み取り専用の問い合わせに使用）
    pub chats_repository: Arc<dyn ChatsRepository>,
}
