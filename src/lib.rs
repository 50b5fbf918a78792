//! HTTP backend for the nutritionist chat agent.
//!
//! One chat endpoint (`POST /conversa`) forwards a user message to a
//! persona-bound LLM agent on Groq and returns the reply. A liveness
//! route (`GET /`) reports that the service is up.

pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
