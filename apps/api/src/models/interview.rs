use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored generation event: the submitting user and the model's items.
#[derive(Debug, Clone, FromRow)]
pub struct CvResultRow {
    pub id: Uuid,
    pub user_id: String,
    pub ai_response: Value,
    pub created_at: DateTime<Utc>,
}
