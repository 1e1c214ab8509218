//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateMessageCommandHandler::execute() メソッド
//! - チャット取得 → Text 生成 → 追加 → 永続化 → イベント発行 の順序
//!
//! ### なぜこのテストが必要か
//! - 存在しないチャットへのメッセージが保存されないことを保証する
//! - MessageReceived イベントの内容（message_oid / message_text / chat_oid）を保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージの追加とイベント発行
//! - 異常系：チャット未存在、空テキスト、長すぎるテキスト

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ChatsRepository, DomainEvent, Message, MessagesRepository, Text};

use super::{
    command::{Command, CommandHandler, CommandOutput, CreateMessageCommand},
    error::ApplicationError,
    mediator::EventDispatcher,
};

/// メッセージ送信のコマンドハンドラ
pub struct CreateMessageCommandHandler {
    chats_repository: Arc<dyn ChatsRepository>,
    messages_repository: Arc<dyn MessagesRepository>,
    events: Arc<EventDispatcher>,
}

impl CreateMessageCommandHandler {
    /// 新しい CreateMessageCommandHandler を作成
    pub fn new(
        chats_repository: Arc<dyn ChatsRepository>,
        messages_repository: Arc<dyn MessagesRepository>,
        events: Arc<EventDispatcher>,
    ) -> Self {
        Self {
            chats_repository,
            messages_repository,
            events,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 追加したメッセージ
    /// * `Err(ApplicationError)` - チャット未存在・バリデーション・ストレージのエラー
    pub async fn execute(
        &self,
        command: &CreateMessageCommand,
    ) -> Result<Message, ApplicationError> {
        // 1. チャットの存在確認（バリデーションより優先）
        let mut chat = self
            .chats_repository
            .get_by_oid(&command.chat_oid)
            .await?
            .ok_or_else(|| ApplicationError::ChatNotFound(command.chat_oid.clone()))?;

        // 2. Value Object の生成
        let text = Text::new(command.text.clone())?;

        // 3. エンティティへの追加と永続化
        let message = Message::new(text);
        chat.add_message(message.clone());
        self.messages_repository
            .add_message(&command.chat_oid, &message)
            .await?;
        tracing::info!(
            chat_oid = chat.oid(),
            message_oid = message.oid(),
            "Message stored"
        );

        // 4. 永続化に成功した後でのみイベントを発行
        // 保存済みのため、発行の失敗はコマンドの結果を変えない
        let events = chat.pull_events();
        if let Err(e) = self.events.publish_event(&events).await {
            let event_ids: Vec<_> = events.iter().map(DomainEvent::event_id).collect();
            tracing::error!(
                chat_oid = chat.oid(),
                message_oid = message.oid(),
                ?event_ids,
                "Failed to publish events: {}",
                e
            );
        }

        Ok(message)
    }
}

#[async_trait]
impl CommandHandler for CreateMessageCommandHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutput, ApplicationError> {
        match command {
            Command::CreateMessage(command) => {
                self.execute(command).await.map(CommandOutput::Message)
            }
            other => Err(ApplicationError::UnexpectedCommand(other.kind())),
        }
    }
}
