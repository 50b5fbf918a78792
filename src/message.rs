// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /conversa`. Wire field names are Portuguese; they are part
/// of the public contract.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "mensagem")]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    #[serde(rename = "resposta")]
    pub reply: String,
}

/// Payload of `GET /`.
#[derive(Serialize)]
pub struct Liveness {
    #[serde(rename = "mensagem")]
    pub message: &'static str,
}
