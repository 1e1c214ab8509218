//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatsRepository / MessagesRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用します（挿入順を保持）。
//!
//! 保存するのはドメインモデル（`Chat`）のコピーです。保存時に未発行のイベントは
//! 取り除かれるため、`get_by_oid` で返る Chat のイベントバッファは常に空です。
//! I/O を行わないため、ロック以外で待機することはありません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Chat, ChatsRepository, Message, MessagesRepository, RepositoryError};

/// インメモリ Chat Repository 実装
#[derive(Default)]
pub struct InMemoryChatRepository {
    /// 保存済みの Chat（挿入順）
    saved_chats: Mutex<Vec<Chat>>,
}

impl InMemoryChatRepository {
    /// 空の InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の Chat を事前に登録した状態で作成（テスト用フィクスチャ向け）
    pub fn with_chats(chats: Vec<Chat>) -> Self {
        let saved_chats = chats.into_iter().map(strip_events).collect();
        Self {
            saved_chats: Mutex::new(saved_chats),
        }
    }

    /// 保存済みの Chat 数
    pub async fn count(&self) -> usize {
        self.saved_chats.lock().await.len()
    }
}

/// 保存用のコピーから未発行イベントを取り除く
fn strip_events(mut chat: Chat) -> Chat {
    chat.pull_events();
    chat
}

#[async_trait]
impl ChatsRepository for InMemoryChatRepository {
    async fn check_exists_by_title(&self, title: &str) -> Result<bool, RepositoryError> {
        let chats = self.saved_chats.lock().await;
        Ok(chats
            .iter()
            .any(|chat| chat.title().as_generic_type() == title))
    }

    async fn get_by_oid(&self, oid: &str) -> Result<Option<Chat>, RepositoryError> {
        let chats = self.saved_chats.lock().await;
        Ok(chats.iter().find(|chat| chat.oid() == oid).cloned())
    }

    async fn add(&self, chat: &Chat) -> Result<(), RepositoryError> {
        let mut chats = self.saved_chats.lock().await;
        chats.push(strip_events(chat.clone()));
        Ok(())
    }
}

#[async_trait]
impl MessagesRepository for InMemoryChatRepository {
    async fn add_message(&self, chat_oid: &str, message: &Message) -> Result<(), RepositoryError> {
        let mut chats = self.saved_chats.lock().await;
        let chat = chats
            .iter_mut()
            .find(|chat| chat.oid() == chat_oid)
            .ok_or_else(|| RepositoryError::ChatNotFound(chat_oid.to_string()))?;
        chat.add_message(message.clone());
        chat.pull_events();
        Ok(())
    }
}
