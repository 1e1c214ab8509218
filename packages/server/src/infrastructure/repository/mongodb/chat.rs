//! MongoDB Chat Repository 実装
//!
//! 1 つのコレクションに Chat ドキュメントを保存します。
//! 重複チェックと挿入は別々の操作であり、アトミックではありません。
//! 同時に同じタイトルで作成された場合、両方が保存されることがあります。

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    Client, Collection,
    bson::{Document, doc},
    options::ClientOptions,
};

use crate::domain::{Chat, ChatsRepository, Message, MessagesRepository, RepositoryError};

use super::converter::{chat_from_document, chat_to_document, message_to_document};

fn storage_error(error: mongodb::error::Error) -> RepositoryError {
    RepositoryError::Storage(error.to_string())
}

/// MongoDB Chat Repository 実装
pub struct MongoChatRepository {
    collection: Collection<Document>,
}

impl MongoChatRepository {
    /// 既存のクライアントからコレクションを指定して作成
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }

    /// 接続文字列からクライアントを作成
    ///
    /// `timeout` は接続とサーバ選択の両方に適用されます。
    /// 実際の接続は最初の操作時に行われます。
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, RepositoryError> {
        let mut options = ClientOptions::parse(uri).await.map_err(storage_error)?;
        options.app_name = Some("kaiwa-server".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(storage_error)?;
        tracing::info!(database, collection, "MongoDB client created");
        Ok(Self::new(&client, database, collection))
    }
}

#[async_trait]
impl ChatsRepository for MongoChatRepository {
    async fn check_exists_by_title(&self, title: &str) -> Result<bool, RepositoryError> {
        let found = self
            .collection
            .find_one(doc! { "title": title })
            .await
            .map_err(storage_error)?;
        Ok(found.is_some())
    }

    async fn get_by_oid(&self, oid: &str) -> Result<Option<Chat>, RepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "oid": oid })
            .await
            .map_err(storage_error)?;
        document.as_ref().map(chat_from_document).transpose()
    }

    async fn add(&self, chat: &Chat) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(chat_to_document(chat))
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

#[async_trait]
impl MessagesRepository for MongoChatRepository {
    async fn add_message(&self, chat_oid: &str, message: &Message) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .update_one(
                doc! { "oid": chat_oid },
                doc! { "$push": { "messages": message_to_document(message) } },
            )
            .await
            .map_err(storage_error)?;

        if result.matched_count == 0 {
            return Err(RepositoryError::ChatNotFound(chat_oid.to_string()));
        }
        Ok(())
    }
}
