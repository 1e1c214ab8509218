//! MongoDB Repository 実装
//!
//! Chat を 1 ドキュメントとして保存し、メッセージはその `messages` 配列に追加します。

mod chat;
mod converter;

pub use chat::MongoChatRepository;
