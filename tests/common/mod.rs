//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vestibular_api::{create_router, AppState, Config, Database, MissingRecordPolicy};

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn setup_db() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };

    Database::connect(&config)
        .await
        .expect("in-memory database should migrate")
}

/// Router over a fresh database with the given missing-record policy.
pub async fn setup_app(policy: MissingRecordPolicy) -> Router {
    let config = Config {
        missing_records: policy,
        ..Config::default()
    };
    let db = Arc::new(setup_db().await);
    create_router(AppState::from_config(db, &config))
}

pub fn inline_lead(name: &str, cpf: &str) -> Value {
    json!({
        "nome": name,
        "email": format!("{}@x.com", name.to_lowercase()),
        "telefone": "111",
        "cpf": cpf
    })
}

pub fn inline_process() -> Value {
    json!({
        "nome": "Vestibular 2025/1",
        "dataInicio": "2025-01-01",
        "dataTermino": "2025-03-01"
    })
}

pub fn inline_offer(name: &str) -> Value {
    json!({
        "nome": name,
        "descricao": "Noturno",
        "vagasDisponiveis": 40
    })
}

/// Creation payload carrying every relation inline.
pub fn new_enrollment_payload(number: i32, lead: Value, offer: Value) -> Value {
    json!({
        "numeroInscricao": number,
        "data": "2025-01-10T09:30:00Z",
        "status": "pendente",
        "lead": lead,
        "processoSeletivo": inline_process(),
        "oferta": offer
    })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
