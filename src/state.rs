// src/state.rs
use std::sync::Arc;

use crate::services::agent::ChatAgent;

pub type SharedState = Arc<AppState>;

/// Shared application state. Holds only the agent capability handle; the
/// handle itself is stateless and every request builds its own agent.
pub struct AppState {
    pub agent: Arc<dyn ChatAgent>,
}

impl AppState {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }
}
