use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::models::User;

/// Repository seam for user records (swappable backing; in-memory today)
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create a user record with a generated id
    async fn create(&self, email: &str, name: &str) -> Result<User>;
}

/// Map-backed user store; state lives only as long as the process
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, name: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            profile_image_url: None,
            created_at: Utc::now(),
        };

        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find_by_email() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create("employer@example.com", "Employer").await.unwrap();
        let found = repo
            .find_by_email("employer@example.com")
            .await
            .unwrap()
            .expect("user should exist");

        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Employer");
    }

    #[tokio::test]
    async fn test_find_unknown_email_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
