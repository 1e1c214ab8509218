//! Conversion between domain entities and MongoDB documents.
//!
//! Document shape:
//!
//! ```text
//! { oid, title, created_at, messages: [ { oid, text, created_at }, ... ] }
//! ```

use mongodb::bson::{DateTime, Document, doc, document::ValueAccessError};

use crate::domain::{Chat, Message, RepositoryError, Text, Timestamp, Title};

fn corrupted(field: &str, reason: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::CorruptedDocument(format!("{field}: {reason}"))
}

pub fn message_to_document(message: &Message) -> Document {
    doc! {
        "oid": message.oid(),
        "text": message.text().as_generic_type(),
        "created_at": DateTime::from_millis(message.created_at().value()),
    }
}

pub fn chat_to_document(chat: &Chat) -> Document {
    let messages: Vec<Document> = chat.messages().iter().map(message_to_document).collect();
    doc! {
        "oid": chat.oid(),
        "title": chat.title().as_generic_type(),
        "created_at": DateTime::from_millis(chat.created_at().value()),
        "messages": messages,
    }
}

pub fn message_from_document(document: &Document) -> Result<Message, RepositoryError> {
    let oid = document.get_str("oid").map_err(|e| corrupted("oid", e))?;
    let text = document.get_str("text").map_err(|e| corrupted("text", e))?;
    let text = Text::new(text.to_string()).map_err(|e| corrupted("text", e))?;
    let created_at = document
        .get_datetime("created_at")
        .map_err(|e| corrupted("created_at", e))?;

    Ok(Message::restore(
        oid.to_string(),
        text,
        Timestamp::new(created_at.timestamp_millis()),
    ))
}

/// Rebuild a chat and its messages. A missing `messages` array is read as empty.
pub fn chat_from_document(document: &Document) -> Result<Chat, RepositoryError> {
    let oid = document.get_str("oid").map_err(|e| corrupted("oid", e))?;
    let title = document.get_str("title").map_err(|e| corrupted("title", e))?;
    let title = Title::new(title.to_string()).map_err(|e| corrupted("title", e))?;
    let created_at = document
        .get_datetime("created_at")
        .map_err(|e| corrupted("created_at", e))?;

    let messages = match document.get_array("messages") {
        Ok(items) => items
            .iter()
            .map(|item| {
                item.as_document()
                    .ok_or_else(|| corrupted("messages", "element is not a document"))
                    .and_then(message_from_document)
            })
            .collect::<Result<Vec<_>, _>>()?,
        Err(ValueAccessError::NotPresent) => Vec::new(),
        Err(e) => return Err(corrupted("messages", e)),
    };

    Ok(Chat::restore(
        oid.to_string(),
        title,
        Timestamp::new(created_at.timestamp_millis()),
        messages,
    ))
}
