use std::sync::Arc;

use crate::core::error::Result;
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::repository::{ContactMessageRepository, NewContactMessage};

/// Service for contact-form submissions
pub struct ContactService {
    messages: Arc<dyn ContactMessageRepository>,
}

impl ContactService {
    pub fn new(messages: Arc<dyn ContactMessageRepository>) -> Self {
        Self { messages }
    }

    /// Store a new contact-form submission
    pub async fn create(&self, dto: CreateContactMessageDto) -> Result<ContactMessageResponseDto> {
        let message = self
            .messages
            .create(NewContactMessage {
                name: dto.name,
                email: dto.email,
                subject: dto.subject,
                message: dto.message,
            })
            .await?;

        tracing::info!(
            "Contact message stored: id={}, from={}",
            message.id,
            message.email
        );

        Ok(message.into())
    }

    /// All stored messages, newest first
    pub async fn list(&self) -> Result<Vec<ContactMessageResponseDto>> {
        let messages = self.messages.list().await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }
}
