use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::contact::models::ContactMessage;

/// Fields accepted when storing a contact message
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Repository seam for contact messages (swappable backing; in-memory today)
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Store a message with a generated id and creation timestamp
    async fn create(&self, new: NewContactMessage) -> Result<ContactMessage>;

    /// All messages, newest first
    async fn list(&self) -> Result<Vec<ContactMessage>>;
}

/// Map-backed message store
#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    messages: RwLock<HashMap<Uuid, ContactMessage>>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn create(&self, new: NewContactMessage) -> Result<ContactMessage> {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            created_at: Utc::now(),
        };

        let mut messages = self.messages.write().await;
        messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>> {
        let messages = self.messages.read().await;
        let mut all: Vec<ContactMessage> = messages.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
