//! UseCase: チャット作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateChatCommandHandler::execute() メソッド
//! - タイトル重複チェック → Title 生成 → 永続化 → イベント発行 の順序
//!
//! ### なぜこのテストが必要か
//! - 重複チェックがバリデーションより先に行われることを保証する
//! - 永続化に失敗した場合にイベントが発行されないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規チャットの作成と ChatCreated イベントの発行
//! - 異常系：タイトル重複、空タイトル、長すぎるタイトル、ストレージ障害

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chat, ChatsRepository, DomainEvent, Title};

use super::{
    command::{Command, CommandHandler, CommandOutput, CreateChatCommand},
    error::ApplicationError,
    mediator::EventDispatcher,
};

/// チャット作成のコマンドハンドラ
pub struct CreateChatCommandHandler {
    /// Repository（データアクセス層の抽象化）
    chats_repository: Arc<dyn ChatsRepository>,
    /// 永続化後にイベントを発行する先
    events: Arc<EventDispatcher>,
}

impl CreateChatCommandHandler {
    /// 新しい CreateChatCommandHandler を作成
    pub fn new(chats_repository: Arc<dyn ChatsRepository>, events: Arc<EventDispatcher>) -> Self {
        Self {
            chats_repository,
            events,
        }
    }

    /// チャット作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Chat)` - 作成したチャット（発行済みのためイベントは空）
    /// * `Err(ApplicationError)` - 重複・バリデーション・ストレージのエラー
    pub async fn execute(&self, command: &CreateChatCommand) -> Result<Chat, ApplicationError> {
        // 1. 重複チェック（バリデーションより優先）
        if self
            .chats_repository
            .check_exists_by_title(&command.title)
            .await?
        {
            return Err(ApplicationError::DuplicateTitle(command.title.clone()));
        }

        // 2. Value Object の生成
        let title = Title::new(command.title.clone())?;

        // 3. エンティティ生成と永続化
        let mut chat = Chat::create_chat(title);
        self.chats_repository.add(&chat).await?;
        tracing::info!(chat_oid = chat.oid(), "Chat stored");

        // 4. 永続化に成功した後でのみイベントを発行
        // 保存済みのため、発行の失敗はコマンドの結果を変えない
        let events = chat.pull_events();
        if let Err(e) = self.events.publish_event(&events).await {
            let event_ids: Vec<_> = events.iter().map(DomainEvent::event_id).collect();
            tracing::error!(
                chat_oid = chat.oid(),
                ?event_ids,
                "Failed to publish events: {}",
                e
            );
        }

        Ok(chat)
    }
}

#[async_trait]
impl CommandHandler for CreateChatCommandHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutput, ApplicationError> {
        match command {
            Command::CreateChat(command) => self.execute(command).await.map(CommandOutput::Chat),
            other => Err(ApplicationError::UnexpectedCommand(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            EventKind, RepositoryError, ValueObjectError,
            repository::MockChatsRepository,
        },
        infrastructure::repository::InMemoryChatRepository,
        usecase::{ChannelEventHandler, CommandKind, CreateMessageCommand, EventHandler},
    };
    use mockall::Sequence;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn create_event_dispatcher() -> (Arc<EventDispatcher>, UnboundedReceiver<DomainEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handler: Arc<dyn EventHandler> = Arc::new(ChannelEventHandler::new(tx));
        let mut events = EventDispatcher::new();
        for kind in EventKind::ALL {
            events.register_event(kind, [Arc::clone(&handler)]);
        }
        (Arc::new(events), rx)
    }

    fn command(title: &str) -> CreateChatCommand {
        CreateChatCommand {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_chat_success() {
        // テスト項目: チャットが作成・保存され、ChatCreated イベントが発行される
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let (events, mut rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(repository.clone(), events);

        // when (操作):
        let mut chat = handler.execute(&command("lobby")).await.unwrap();

        // then (期待する結果):
        assert_eq!(chat.title().as_generic_type(), "lobby");
        assert!(repository.check_exists_by_title("lobby").await.unwrap());
        assert!(chat.pull_events().is_empty());

        match rx.try_recv().unwrap() {
            DomainEvent::ChatCreated(event) => {
                assert_eq!(event.chat_oid(), chat.oid());
                assert_eq!(event.chat_title(), "lobby");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_create_chat_duplicate_title_fails() {
        // テスト項目: 同じタイトルで 2 回作成すると DuplicateTitle になり、保存数は 1 のまま
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let (events, _rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(repository.clone(), events);
        handler.execute(&command("lobby")).await.unwrap();

        // when (操作):
        let result = handler.execute(&command("lobby")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ApplicationError::DuplicateTitle("lobby".to_string())
        );
        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_chat_empty_title_fails() {
        // テスト項目: 空タイトルはバリデーションエラーになり保存されない
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let (events, mut rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(repository.clone(), events);

        // when (操作):
        let result = handler.execute(&command("")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ApplicationError::Validation(ValueObjectError::TitleEmpty)
        );
        assert_eq!(repository.count().await, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_create_chat_too_long_title_fails() {
        // テスト項目: 256 文字以上のタイトルはバリデーションエラーになる
        let repository = Arc::new(InMemoryChatRepository::new());
        let (events, _rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(repository.clone(), events);

        let result = handler.execute(&command(&"a".repeat(500))).await;

        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Validation(ValueObjectError::TitleTooLong { actual: 500, .. })
        ));
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_check_precedes_validation() {
        // テスト項目: 重複チェックはバリデーションより先に行われ、DuplicateTitle が優先される
        // given (前提条件): 空タイトルのチャットが既に存在すると答える Repository
        let mut repository = MockChatsRepository::new();
        repository
            .expect_check_exists_by_title()
            .withf(|title| title.is_empty())
            .times(1)
            .returning(|_| Ok(true));
        repository.expect_add().times(0);
        let (events, _rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(Arc::new(repository), events);

        // when (操作):
        let result = handler.execute(&command("")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ApplicationError::DuplicateTitle(String::new())
        );
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_without_events() {
        // テスト項目: 保存に失敗した場合はストレージエラーがそのまま返り、イベントは発行されない
        // given (前提条件):
        let mut repository = MockChatsRepository::new();
        let mut seq = Sequence::new();
        repository
            .expect_check_exists_by_title()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        repository
            .expect_add()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::Storage("connection refused".to_string())));
        let (events, mut rx) = create_event_dispatcher();
        let handler = CreateChatCommandHandler::new(Arc::new(repository), events);

        // when (操作):
        let result = handler.execute(&command("lobby")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ApplicationError::Repository(RepositoryError::Storage(
                "connection refused".to_string()
            ))
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_publish_failure_after_store_keeps_result() {
        // テスト項目: 保存後のイベント発行に失敗してもチャット作成は成功として返る
        // given (前提条件): 受信側が閉じたチャネルにイベントを流すハンドラ
        let repository = Arc::new(InMemoryChatRepository::new());
        let (events, rx) = create_event_dispatcher();
        drop(rx);
        let handler = CreateChatCommandHandler::new(repository.clone(), events);

        // when (操作):
        let result = handler.execute(&command("lobby")).await;

        // then (期待する結果):
        let chat = result.unwrap();
        assert_eq!(chat.title().as_generic_type(), "lobby");
        assert_eq!(repository.count().await, 1);

        // 再実行は通常どおり重複として扱われる
        let retry = handler.execute(&command("lobby")).await;
        assert_eq!(
            retry.unwrap_err(),
            ApplicationError::DuplicateTitle("lobby".to_string())
        );
        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_handle_rejects_other_command_kinds() {
        // テスト項目: 別種のコマンドを渡されると UnexpectedCommand を返す
        // given (前提条件):
        let (events, _rx) = create_event_dispatcher();
        let handler =
            CreateChatCommandHandler::new(Arc::new(InMemoryChatRepository::new()), events);
        let other: Command = CreateMessageCommand {
            chat_oid: "chat".to_string(),
            text: "hi".to_string(),
        }
        .into();

        // when (操作):
        let result = handler.handle(&other).await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(ApplicationError::UnexpectedCommand(CommandKind::CreateMessage))
        ));
    }
}
