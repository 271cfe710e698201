use std::sync::Arc;

use crate::config::Config;
use crate::interview::store::ResultStore;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. Production: `LlmClient` (Groq).
    pub llm: Arc<dyn ChatModel>,
    /// Result store. Production: `PgResultStore`.
    pub store: Arc<dyn ResultStore>,
    pub config: Config,
}
