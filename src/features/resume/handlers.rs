use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tokio_util::io::ReaderStream;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::resume::dtos::{ResumeResponseDto, UploadResumeForm};
use crate::features::resume::services::ResumeService;
use crate::shared::types::ApiResponse;

/// Upload a new resume (employer only); replaces any previous upload
#[utoipa::path(
    post,
    path = "/api/resume/upload",
    request_body(content = UploadResumeForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Resume uploaded", body = ApiResponse<ResumeResponseDto>),
        (status = 400, description = "Missing file, unsupported type or size limit exceeded"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "resume"
)]
pub async fn upload_resume(
    user: AuthenticatedUser,
    State(service): State<Arc<ResumeService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ResumeResponseDto>>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "resume".to_string());
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .ok_or_else(|| {
                AppError::Validation("Resume field is missing a content type".to_string())
            })?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read resume field: {}", e)))?;

        let resume = service
            .upload(&original_name, &content_type, &data, &user.sub)
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(resume),
                Some("Resume uploaded".to_string()),
            )),
        ));
    }

    Err(AppError::Validation(
        "Multipart field 'resume' is required".to_string(),
    ))
}

/// Download the current resume
#[utoipa::path(
    get,
    path = "/api/resume",
    responses(
        (status = 200, description = "Resume document"),
        (status = 404, description = "No resume uploaded")
    ),
    tag = "resume"
)]
pub async fn download_resume(State(service): State<Arc<ResumeService>>) -> Result<Response> {
    let document = service.current().await?;

    let file = match tokio::fs::File::open(&document.path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("Resume file missing from disk".to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, &document.content_type)
        .header(header::CONTENT_LENGTH, document.size)
        .header(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                document.original_name.replace('"', "")
            ),
        )
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build download response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::features::resume::repository::InMemoryResumeRepository;
    use crate::modules::storage::LocalStorageClient;
    use crate::shared::test_helpers::with_employer_auth;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    async fn test_server(dir: &std::path::Path) -> TestServer {
        let storage = Arc::new(LocalStorageClient::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().to_string(),
            public_base: "/uploads".to_string(),
        }));
        storage.ensure_dirs_exist().await.unwrap();
        let service = Arc::new(ResumeService::new(
            Arc::new(InMemoryResumeRepository::new()),
            storage,
        ));

        let router = crate::features::resume::routes::public_routes(Arc::clone(&service)).merge(
            with_employer_auth(crate::features::resume::routes::protected_routes(service)),
        );
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_download_without_upload_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(tmp.path()).await;

        let response = server.get("/api/resume").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_then_download_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(tmp.path()).await;

        let form = MultipartForm::new().add_part(
            "resume",
            Part::bytes(b"%PDF-1.7 fake resume".to_vec())
                .file_name("jane-doe.pdf")
                .mime_type("application/pdf"),
        );
        let response = server.post("/api/resume/upload").multipart(form).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let response = server.get("/api/resume").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.header(header::CONTENT_TYPE).to_str().unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response
                .header(header::CONTENT_DISPOSITION)
                .to_str()
                .unwrap(),
            "attachment; filename=\"jane-doe.pdf\""
        );
        assert_eq!(response.as_bytes().as_ref(), b"%PDF-1.7 fake resume");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type_is_400() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(tmp.path()).await;

        let form = MultipartForm::new().add_part(
            "resume",
            Part::bytes(b"plain text".to_vec())
                .file_name("resume.txt")
                .mime_type("text/plain"),
        );
        let response = server.post("/api/resume/upload").multipart(form).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
