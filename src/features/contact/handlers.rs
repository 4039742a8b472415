use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit a contact-form message
///
/// Public endpoint backing the site's contact section. Messages are stored
/// in memory only; nothing is delivered anywhere.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<ContactMessageResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn create_message(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactMessageDto>,
) -> Result<Json<ApiResponse<ContactMessageResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(message),
        Some("Thanks for reaching out! I'll get back to you soon.".to_string()),
    )))
}

/// List stored contact messages (employer only)
#[utoipa::path(
    get,
    path = "/api/contact-messages",
    responses(
        (status = 200, description = "Messages, newest first", body = ApiResponse<Vec<ContactMessageResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "contact"
)]
pub async fn list_messages(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactMessageResponseDto>>>> {
    let messages = service.list().await?;
    Ok(Json(ApiResponse::success(Some(messages), None)))
}
