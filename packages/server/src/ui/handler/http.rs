//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{
        ChatDetailDto, CreateChatRequestDto, CreateChatResponseDto, CreateMessageRequestDto,
        CreateMessageResponseDto,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{CommandOutput, CreateChatCommand, CreateMessageCommand},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a new chat. Fails with 400 if a chat with the same title exists.
pub async fn create_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateChatRequestDto>,
) -> Result<(StatusCode, Json<CreateChatResponseDto>), ApiError> {
    let outputs = state
        .mediator
        .handle_command(CreateChatCommand { title: body.title })
        .await?;

    let chat = outputs
        .into_iter()
        .next()
        .and_then(CommandOutput::into_chat)
        .ok_or_else(|| ApiError::Internal("CreateChat produced no chat".to_string()))?;

    Ok((StatusCode::CREATED, Json(CreateChatResponseDto::from(&chat))))
}

/// Append a message to an existing chat.
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Path(chat_oid): Path<String>,
    Json(body): Json<CreateMessageRequestDto>,
) -> Result<(StatusCode, Json<CreateMessageResponseDto>), ApiError> {
    let outputs = state
        .mediator
        .handle_command(CreateMessageCommand {
            chat_oid,
            text: body.text,
        })
        .await?;

    let message = outputs
        .into_iter()
        .next()
        .and_then(CommandOutput::into_message)
        .ok_or_else(|| ApiError::Internal("CreateMessage produced no message".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMessageResponseDto::from(&message)),
    ))
}

/// Get chat detail by oid
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_oid): Path<String>,
) -> Result<Json<ChatDetailDto>, ApiError> {
    let chat = state
        .chats_repository
        .get_by_oid(&chat_oid)
        .await
        .map_err(|e| ApiError::Application(e.into()))?
        .ok_or_else(|| ApiError::NotFound(format!("Chat not found: {chat_oid}")))?;

    Ok(Json(ChatDetailDto::from(&chat)))
}
