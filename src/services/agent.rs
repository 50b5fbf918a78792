//! The nutritionist chat agent.
//!
//! An agent is pure config (persona prompt, model id, temperature) bound to
//! a provider client. One is built per request and discarded after its
//! single turn; nothing is cached between requests.

use std::env::{self, VarError};

use async_trait::async_trait;
use thiserror::Error;

use super::provider::{CompletionRequest, GroqClient, Message, ProviderError};

/// Environment variable holding the Groq API key. Read at agent build time,
/// never validated ahead of use.
pub const CREDENTIAL_ENV: &str = "GROQ_API_KEY";

/// Model served by Groq.
pub const MODEL: &str = "openai/gpt-oss-120b";

/// Sampling temperature for every call.
pub const TEMPERATURE: f32 = 0.2;

/// System prompt pinning the agent to its persona: Portuguese-only
/// nutritionist for people with diabetes, redirecting off-topic requests
/// back to nutrition.
pub const PERSONA: &str = "Você vai responder sempre no idioma Português e será um nutricionista \
    especializado em pessoas com diabetes e em criar um plano de alimentação para elas. \
    Você vai responder sempre de forma clara e objetiva. \
    Você vai responder sempre de forma profissional e com empatia. \
    Caso o usuário solicite algo que não esteja relacionado à nutrição, \
    você vai redirecionar a conversa para o tema de nutrição.";

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("GROQ_API_KEY is not set")]
    MissingCredential(#[from] VarError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("completion contained no reply")]
    EmptyReply,
}

/// The one operation the HTTP layer needs: submit a message, receive a reply.
///
/// Implementors encapsulate provider construction and transport; tests
/// substitute a mock at this boundary.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, AgentError>;
}

/// A persona-bound agent, valid for a single turn.
#[derive(Debug)]
pub struct Agent {
    provider: GroqClient,
}

/// Build a fresh agent. The credential is read from the environment here,
/// not at startup; a missing key surfaces on the first call that needs it.
pub fn build_agent() -> Result<Agent, AgentError> {
    let key = env::var(CREDENTIAL_ENV)?;
    let provider = GroqClient::new(reqwest::Client::new(), &key)?;
    Ok(Agent { provider })
}

impl Agent {
    /// Send exactly one user turn and return the reply text.
    pub async fn converse(&self, message: &str) -> Result<String, AgentError> {
        let request = CompletionRequest {
            model: MODEL.to_owned(),
            messages: vec![Message::system(PERSONA), Message::user(message)],
            temperature: TEMPERATURE,
        };
        let completion = self.provider.send(&request).await?;
        completion.content().ok_or(AgentError::EmptyReply)
    }
}

/// Production [`ChatAgent`]: builds a fresh [`Agent`] per call and discards
/// it afterwards.
pub struct Nutritionist;

#[async_trait]
impl ChatAgent for Nutritionist {
    async fn reply(&self, message: &str) -> Result<String, AgentError> {
        let agent = build_agent()?;
        agent.converse(message).await
    }
}
