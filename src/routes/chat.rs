use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// `POST /conversa`: forward one message to the agent and return its reply.
///
/// Missing or mis-typed `mensagem` never reaches this function: the `Json`
/// extractor rejects it with 422 first.
pub async fn conversa_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation("mensagem cannot be empty".to_string()));
    }

    let reply = state.agent.reply(trimmed).await?;

    Ok(Json(ChatResponse { reply }))
}
