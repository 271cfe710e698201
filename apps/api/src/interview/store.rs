//! Result Store: write-only log of successful generations.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`; `PgResultStore` is the
//! production backend.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::interview::CvResultRow;

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Inserts one `{user_id, AIResponse}` record. No uniqueness or
    /// idempotency check: repeated calls create repeated records.
    async fn insert(&self, user_id: &str, items: &Value) -> Result<CvResultRow, sqlx::Error>;
}

pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn insert(&self, user_id: &str, items: &Value) -> Result<CvResultRow, sqlx::Error> {
        let row: CvResultRow = sqlx::query_as(
            r#"
            INSERT INTO cv_results (id, user_id, ai_response)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, ai_response, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(items)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored interview result {} for user {}", row.id, row.user_id);
        Ok(row)
    }
}
