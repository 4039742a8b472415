use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Range not satisfiable for resource of {0} bytes")]
    RangeNotSatisfiable(u64),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
            AppError::RangeNotSatisfiable(len) => {
                let mut response = (
                    StatusCode::RANGE_NOT_SATISFIABLE,
                    Json(ApiResponse::<()>::error(
                        Some("Requested range not satisfiable".to_string()),
                        None,
                    )),
                )
                    .into_response();
                if let Ok(value) = format!("bytes */{}", len).parse() {
                    response
                        .headers_mut()
                        .insert(axum::http::header::CONTENT_RANGE, value);
                }
                return response;
            }
            // Provider failures are a 500 with a generic body; detail goes to the log
            AppError::ExternalService(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Upstream service failure".to_string(),
                    None,
                )
            }
            AppError::Io(ref e) => {
                tracing::error!("I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
