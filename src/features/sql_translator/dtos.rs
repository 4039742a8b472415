use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sql_translator::models::SqlQuery;

/// Request DTO for a translation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateSqlRequestDto {
    /// The natural-language request to translate
    #[validate(length(min = 1, max = 2000, message = "naturalLanguage must be 1-2000 characters"))]
    pub natural_language: String,
}

/// Response DTO for a translation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateSqlResponseDto {
    pub sql: String,
    pub explanation: String,
}

/// Response DTO for a stored translation record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SqlQueryResponseDto {
    pub id: Uuid,
    pub natural_language: String,
    pub sql: String,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl From<SqlQuery> for SqlQueryResponseDto {
    fn from(q: SqlQuery) -> Self {
        Self {
            id: q.id,
            natural_language: q.natural_language,
            sql: q.generated_sql,
            explanation: q.explanation,
            created_at: q.created_at,
        }
    }
}
