use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use nutri_agent_backend::routes::create_router;
use nutri_agent_backend::services::agent::{AgentError, CREDENTIAL_ENV, ChatAgent, Nutritionist};
use nutri_agent_backend::state::AppState;

/// Mock for the agent capability, counting how often it is invoked.
#[derive(Default)]
struct MockAgent {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl ChatAgent for MockAgent {
    async fn reply(&self, _message: &str) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AgentError::EmptyReply);
        }
        Ok("Evite açúcares simples e farinhas refinadas.".to_string())
    }
}

fn post_conversa(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/conversa")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_liveness_payload() {
    let state = Arc::new(AppState::new(Arc::new(MockAgent::default())));
    let app = create_router().with_state(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"mensagem": "API do Agente Nutricionista está ativa!"})
    );
}

#[tokio::test]
async fn conversa_returns_reply_with_single_key() {
    let mock = Arc::new(MockAgent::default());
    let app = create_router().with_state(Arc::new(AppState::new(mock.clone())));

    let response = app
        .oneshot(post_conversa(r#"{"mensagem": "Quais alimentos devo evitar?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    let reply = object["resposta"].as_str().unwrap();
    assert!(!reply.is_empty());
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn conversa_rejects_missing_field_before_any_agent_call() {
    let mock = Arc::new(MockAgent::default());
    let app = create_router().with_state(Arc::new(AppState::new(mock.clone())));

    let response = app.oneshot(post_conversa("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn conversa_rejects_non_string_message() {
    let mock = Arc::new(MockAgent::default());
    let app = create_router().with_state(Arc::new(AppState::new(mock.clone())));

    let response = app
        .oneshot(post_conversa(r#"{"mensagem": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn conversa_rejects_blank_message() {
    let mock = Arc::new(MockAgent::default());
    let app = create_router().with_state(Arc::new(AppState::new(mock.clone())));

    let response = app
        .oneshot(post_conversa(r#"{"mensagem": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn conversa_surfaces_agent_failure_as_server_error() {
    let mock = Arc::new(MockAgent {
        fail: true,
        ..Default::default()
    });
    let app = create_router().with_state(Arc::new(AppState::new(mock.clone())));

    let response = app
        .oneshot(post_conversa(r#"{"mensagem": "oi"}"#))
        .await
        .unwrap();

    assert!(response.status().is_server_error());
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn conversa_without_credential_is_a_server_error() {
    // No other test in this binary touches the environment.
    unsafe { std::env::remove_var(CREDENTIAL_ENV) };

    let state = Arc::new(AppState::new(Arc::new(Nutritionist)));
    let app = create_router().with_state(state);

    let response = app
        .oneshot(post_conversa(r#"{"mensagem": "oi"}"#))
        .await
        .unwrap();

    assert!(response.status().is_server_error());
}
