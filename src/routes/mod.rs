// src/routes/mod.rs
pub mod chat;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::message::Liveness;
use crate::state::SharedState;
use chat::conversa_handler;

/// Fixed liveness payload for `GET /`.
const LIVENESS: &str = "API do Agente Nutricionista está ativa!";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/conversa", post(conversa_handler))
        .route("/", get(root_handler))
        .layer(TraceLayer::new_for_http())
}

async fn root_handler() -> Json<Liveness> {
    Json(Liveness { message: LIVENESS })
}
