//! Fakes for driving the router without a provider or database.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::interview::store::ResultStore;
use crate::llm_client::{ChatModel, ChatPrompt, LlmError};
use crate::models::interview::CvResultRow;
use crate::routes::build_router;
use crate::state::AppState;

pub(crate) struct FakeModel {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<ChatPrompt>>,
}

impl FakeModel {
    pub(crate) fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// A model whose every call fails with a provider error.
    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> ChatPrompt {
        self.prompts.lock().unwrap().last().cloned().expect("model was never called")
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: Mutex<Vec<CvResultRow>>,
    fail: bool,
}

impl MemoryStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub(crate) fn rows(&self) -> Vec<CvResultRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn insert(&self, user_id: &str, items: &Value) -> Result<CvResultRow, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let row = CvResultRow {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            ai_response: items.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

pub(crate) fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/unused".to_string(),
        groq_api_key: "test-key".to_string(),
        cors_allowed_origin: "http://localhost:3000".to_string(),
        port: 0,
        max_upload_bytes: 1024 * 1024,
        rust_log: "info".to_string(),
    }
}

pub(crate) fn test_router(model: &Arc<FakeModel>, store: &Arc<MemoryStore>) -> Router {
    build_router(AppState {
        llm: model.clone(),
        store: store.clone(),
        config: test_config(),
    })
}

const BOUNDARY: &str = "interview-test-boundary";

/// Builds a multipart/form-data request. `file` is `(filename, bytes)` for `cv_file`.
pub(crate) fn multipart_request(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cv_file\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub(crate) async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
