use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::sql_translator::handlers;
use crate::features::sql_translator::services::SqlTranslationService;

/// Public translation routes
pub fn routes(service: Arc<SqlTranslationService>) -> Router {
    Router::new()
        .route("/api/translate-sql", post(handlers::translate_sql))
        .route("/api/sql-queries", get(handlers::list_queries))
        .with_state(service)
}
