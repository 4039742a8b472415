use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::sql_translator::models::SqlQuery;

/// Fields accepted when recording a translation exchange
#[derive(Debug, Clone)]
pub struct NewSqlQuery {
    pub natural_language: String,
    pub generated_sql: String,
    pub explanation: String,
}

/// Repository seam for translation records (swappable backing; in-memory today)
#[async_trait]
pub trait SqlQueryRepository: Send + Sync {
    /// Store an exchange with a generated id and creation timestamp
    async fn create(&self, new: NewSqlQuery) -> Result<SqlQuery>;

    /// The most recent exchanges, newest first, capped at `limit`
    async fn recent(&self, limit: usize) -> Result<Vec<SqlQuery>>;
}

/// Map-backed translation record store
#[derive(Default)]
pub struct InMemorySqlQueryRepository {
    queries: RwLock<HashMap<Uuid, SqlQuery>>,
}

impl InMemorySqlQueryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SqlQueryRepository for InMemorySqlQueryRepository {
    async fn create(&self, new: NewSqlQuery) -> Result<SqlQuery> {
        let query = SqlQuery {
            id: Uuid::new_v4(),
            natural_language: new.natural_language,
            generated_sql: new.generated_sql,
            explanation: new.explanation,
            created_at: Utc::now(),
        };

        let mut queries = self.queries.write().await;
        queries.insert(query.id, query.clone());
        Ok(query)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SqlQuery>> {
        let queries = self.queries.read().await;
        let mut all: Vec<SqlQuery> = queries.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        Ok(all)
    }
}
