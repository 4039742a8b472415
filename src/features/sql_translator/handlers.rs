use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::sql_translator::dtos::{
    SqlQueryResponseDto, TranslateSqlRequestDto, TranslateSqlResponseDto,
};
use crate::features::sql_translator::services::SqlTranslationService;
use crate::shared::types::ApiResponse;

/// Translate a natural-language request into SQL
///
/// Forwards the request to the LLM provider with a fixed system prompt
/// describing the demo financial schema, validates the reply, and stores
/// the exchange.
#[utoipa::path(
    post,
    path = "/api/translate-sql",
    request_body = TranslateSqlRequestDto,
    responses(
        (status = 200, description = "Translation result", body = ApiResponse<TranslateSqlResponseDto>),
        (status = 400, description = "Missing or empty input"),
        (status = 500, description = "Provider failure")
    ),
    tag = "sql-translator"
)]
pub async fn translate_sql(
    State(service): State<Arc<SqlTranslationService>>,
    AppJson(dto): AppJson<TranslateSqlRequestDto>,
) -> Result<Json<ApiResponse<TranslateSqlResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let translation = service.translate(dto.natural_language.trim()).await?;
    Ok(Json(ApiResponse::success(Some(translation), None)))
}

/// List recent translations
///
/// Returns up to the 10 most recent exchanges, newest first.
#[utoipa::path(
    get,
    path = "/api/sql-queries",
    responses(
        (status = 200, description = "Recent translation records", body = ApiResponse<Vec<SqlQueryResponseDto>>)
    ),
    tag = "sql-translator"
)]
pub async fn list_queries(
    State(service): State<Arc<SqlTranslationService>>,
) -> Result<Json<ApiResponse<Vec<SqlQueryResponseDto>>>> {
    let queries = service.recent_queries().await?;
    Ok(Json(ApiResponse::success(Some(queries), None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OpenAiConfig;
    use crate::features::sql_translator::repository::{
        InMemorySqlQueryRepository, NewSqlQuery, SqlQueryRepository,
    };
    use crate::shared::llm::OpenAiClient;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::time::Duration;

    fn test_server(repo: Arc<InMemorySqlQueryRepository>) -> TestServer {
        // Points nowhere; the listing endpoint never makes a provider call
        let client = Arc::new(
            OpenAiClient::new(OpenAiConfig {
                api_key: "test-key".to_string(),
                model: "gpt-4o-mini".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
                request_timeout: Duration::from_secs(1),
            })
            .unwrap(),
        );
        let service = Arc::new(SqlTranslationService::new(client, repo));
        let router = crate::features::sql_translator::routes::routes(service);
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_list_queries_caps_at_ten_newest_first() {
        let repo = Arc::new(InMemorySqlQueryRepository::new());
        for n in 0..15 {
            repo.create(NewSqlQuery {
                natural_language: format!("request {}", n),
                generated_sql: format!("SELECT {}", n),
                explanation: "test".to_string(),
            })
            .await
            .unwrap();
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        let server = test_server(repo);
        let response = server.get("/api/sql-queries").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: ApiResponse<Vec<SqlQueryResponseDto>> = response.json();
        let queries = body.data.unwrap();
        assert_eq!(queries.len(), 10);
        assert_eq!(queries[0].sql, "SELECT 14");
        assert_eq!(queries[9].sql, "SELECT 5");
    }

    #[tokio::test]
    async fn test_translate_missing_input_is_400() {
        let repo = Arc::new(InMemorySqlQueryRepository::new());
        let server = test_server(repo);

        let response = server.post("/api/translate-sql").json(&json!({})).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translate_empty_input_is_400() {
        let repo = Arc::new(InMemorySqlQueryRepository::new());
        let server = test_server(repo);

        let response = server
            .post("/api/translate-sql")
            .json(&json!({"naturalLanguage": ""}))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translate_unreachable_provider_is_500() {
        let repo = Arc::new(InMemorySqlQueryRepository::new());
        let server = test_server(Arc::clone(&repo));

        let response = server
            .post("/api/translate-sql")
            .json(&json!({"naturalLanguage": "show all customers"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(repo.recent(10).await.unwrap().is_empty());
    }
}
