use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::resume::models::ResumeDocument;

/// Repository seam for the single resume document
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Replace the stored document, returning the previous one if any
    async fn replace(&self, document: ResumeDocument) -> Result<Option<ResumeDocument>>;

    async fn get(&self) -> Result<Option<ResumeDocument>>;
}

/// In-memory holder for the latest resume
#[derive(Default)]
pub struct InMemoryResumeRepository {
    current: RwLock<Option<ResumeDocument>>,
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn replace(&self, document: ResumeDocument) -> Result<Option<ResumeDocument>> {
        let mut current = self.current.write().await;
        Ok(current.replace(document))
    }

    async fn get(&self) -> Result<Option<ResumeDocument>> {
        let current = self.current.read().await;
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn document(name: &str) -> ResumeDocument {
        ResumeDocument {
            file_name: format!("{}.pdf", name),
            original_name: "resume.pdf".to_string(),
            path: PathBuf::from(format!("/tmp/{}.pdf", name)),
            content_type: "application/pdf".to_string(),
            size: 100,
            uploaded_by: "user-1".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_replace_returns_previous_document() {
        let repo = InMemoryResumeRepository::new();
        assert!(repo.get().await.unwrap().is_none());

        assert!(repo.replace(document("first")).await.unwrap().is_none());
        let previous = repo.replace(document("second")).await.unwrap().unwrap();
        assert_eq!(previous.file_name, "first.pdf");

        let current = repo.get().await.unwrap().unwrap();
        assert_eq!(current.file_name, "second.pdf");
    }
}
