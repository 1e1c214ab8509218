//! HTTP API request/response DTOs for the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::{Chat, Message};

/// Body of `POST /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequestDto {
    pub title: String,
}

/// Response of `POST /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatResponseDto {
    pub oid: String,
    pub title: String,
}

impl From<&Chat> for CreateChatResponseDto {
    fn from(chat: &Chat) -> Self {
        Self {
            oid: chat.oid().to_string(),
            title: chat.title().as_generic_type().to_string(),
        }
    }
}

/// Body of `POST /{chat_oid}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequestDto {
    pub text: String,
}

/// Response of `POST /{chat_oid}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageResponseDto {
    pub oid: String,
    pub text: String,
}

impl From<&Message> for CreateMessageResponseDto {
    fn from(message: &Message) -> Self {
        Self {
            oid: message.oid().to_string(),
            text: message.text().as_generic_type().to_string(),
        }
    }
}

/// Chat detail for `GET /{chat_oid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatDetailDto {
    pub oid: String,
    pub title: String,
    pub created_at: String, // ISO 8601
    pub messages: Vec<MessageDetailDto>,
}

/// Message entry of [`ChatDetailDto`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDetailDto {
    pub oid: String,
    pub text: String,
    pub created_at: String, // ISO 8601
}

impl From<&Chat> for ChatDetailDto {
    fn from(chat: &Chat) -> Self {
        Self {
            oid: chat.oid().to_string(),
            title: chat.title().as_generic_type().to_string(),
            created_at: chat.created_at().to_rfc3339(),
            messages: chat
                .messages()
                .iter()
                .map(|m| MessageDetailDto {
                    oid: m.oid().to_string(),
                    text: m.text().as_generic_type().to_string(),
                    created_at: m.created_at().to_rfc3339(),
                })
                .collect(),
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
