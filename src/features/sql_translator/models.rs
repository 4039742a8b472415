use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One natural-language → SQL translation exchange. Immutable once stored.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    pub id: Uuid,
    pub natural_language: String,
    pub generated_sql: String,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}
