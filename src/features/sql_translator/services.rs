use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::features::sql_translator::dtos::{SqlQueryResponseDto, TranslateSqlResponseDto};
use crate::features::sql_translator::repository::{NewSqlQuery, SqlQueryRepository};
use crate::shared::constants::RECENT_QUERIES_LIMIT;
use crate::shared::llm::{parse_with_fallback, LlmResponse, OpenAiClient};
use crate::shared::prompts::render_template;

const PROMPT_TEMPLATE: &str = "sql_translation.jinja";

fn default_true() -> bool {
    true
}

/// Provider reply, schema-validated before use
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SqlTranslationReply {
    /// The generated SQL query
    pub sql: String,
    /// Plain-English explanation of what the query does
    pub explanation: String,

    #[serde(default = "default_true")]
    #[schemars(skip)]
    pub is_llm_success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub llm_error_message: Option<String>,
}

impl LlmResponse for SqlTranslationReply {
    fn mark_as_fallback(&mut self, error_message: String) {
        self.is_llm_success = false;
        self.llm_error_message = Some(error_message);
    }

    fn is_success(&self) -> bool {
        self.is_llm_success
    }
}

/// Natural-language → SQL translation backed by the OpenAI API
pub struct SqlTranslationService {
    client: Arc<OpenAiClient>,
    queries: Arc<dyn SqlQueryRepository>,
}

impl SqlTranslationService {
    pub fn new(client: Arc<OpenAiClient>, queries: Arc<dyn SqlQueryRepository>) -> Self {
        Self { client, queries }
    }

    /// Translate a natural-language request, store the exchange, and return it
    pub async fn translate(&self, natural_language: &str) -> Result<TranslateSqlResponseDto> {
        let system_prompt = render_template(
            PROMPT_TEMPLATE,
            minijinja::context! {
                response_schema => SqlTranslationReply::json_schema_string(),
            },
        )
        .map_err(|e| AppError::Internal(format!("Failed to render prompt: {}", e)))?;

        let raw = self.client.chat(&system_prompt, natural_language).await?;

        let reply: SqlTranslationReply = parse_with_fallback(&raw);
        if !reply.is_success() {
            return Err(AppError::ExternalService(format!(
                "Provider reply failed schema validation: {}",
                reply.llm_error_message.unwrap_or_default()
            )));
        }

        let stored = self
            .queries
            .create(NewSqlQuery {
                natural_language: natural_language.to_string(),
                generated_sql: reply.sql,
                explanation: reply.explanation,
            })
            .await?;

        tracing::info!("Translation stored: id={}", stored.id);

        Ok(TranslateSqlResponseDto {
            sql: stored.generated_sql,
            explanation: stored.explanation,
        })
    }

    /// The most recent translation records, newest first, capped at 10
    pub async fn recent_queries(&self) -> Result<Vec<SqlQueryResponseDto>> {
        let queries = self.queries.recent(RECENT_QUERIES_LIMIT).await?;
        Ok(queries.into_iter().map(Into::into).collect())
    }
}
