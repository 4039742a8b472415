use std::io::SeekFrom;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    Json,
};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::videos::dtos::{UploadVideoForm, VideoResponseDto};
use crate::features::videos::range::{parse_range, RangeOutcome};
use crate::features::videos::services::VideoService;
use crate::shared::types::ApiResponse;

/// Upload an introduction video (employer only)
///
/// The new upload becomes the active video; earlier uploads are deactivated.
#[utoipa::path(
    post,
    path = "/api/videos/upload",
    request_body(content = UploadVideoForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Video uploaded and activated", body = ApiResponse<VideoResponseDto>),
        (status = 400, description = "Missing file, unsupported type or size limit exceeded"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "videos"
)]
pub async fn upload_video(
    user: AuthenticatedUser,
    State(service): State<Arc<VideoService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<VideoResponseDto>>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("video") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .ok_or_else(|| {
                AppError::Validation("Video field is missing a content type".to_string())
            })?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read video field: {}", e)))?;

        let video = service.upload(&content_type, &data, &user.sub).await?;

        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(video),
                Some("Video uploaded".to_string()),
            )),
        ));
    }

    Err(AppError::Validation(
        "Multipart field 'video' is required".to_string(),
    ))
}

/// Make an existing video the active one (employer only)
#[utoipa::path(
    post,
    path = "/api/videos/{id}/activate",
    params(("id" = Uuid, Path, description = "Video id")),
    responses(
        (status = 200, description = "Video activated", body = ApiResponse<VideoResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Video not found")
    ),
    security(("bearer_auth" = [])),
    tag = "videos"
)]
pub async fn activate_video(
    State(service): State<Arc<VideoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VideoResponseDto>>> {
    let video = service.activate(id).await?;
    Ok(Json(ApiResponse::success(
        Some(video),
        Some("Video activated".to_string()),
    )))
}

/// List all uploaded videos, newest first
#[utoipa::path(
    get,
    path = "/api/videos",
    responses(
        (status = 200, description = "Uploaded videos", body = ApiResponse<Vec<VideoResponseDto>>)
    ),
    tag = "videos"
)]
pub async fn list_videos(
    State(service): State<Arc<VideoService>>,
) -> Result<Json<ApiResponse<Vec<VideoResponseDto>>>> {
    let videos = service.list().await?;
    Ok(Json(ApiResponse::success(Some(videos), None)))
}

/// Stream the active introduction video
///
/// Honors single-range `Range` headers with a 206 partial response so
/// browsers can seek; serves the full file otherwise.
#[utoipa::path(
    get,
    path = "/api/introduction-video",
    responses(
        (status = 200, description = "Full video stream"),
        (status = 206, description = "Partial video stream"),
        (status = 404, description = "No active video"),
        (status = 416, description = "Range starts past end of file")
    ),
    tag = "videos"
)]
pub async fn stream_introduction_video(
    State(service): State<Arc<VideoService>>,
    headers: HeaderMap,
) -> Result<Response> {
    let (video, total) = service.active_video().await?;

    let outcome = match headers.get(header::RANGE).and_then(|v| v.to_str().ok()) {
        Some(value) => parse_range(value, total)?,
        None => RangeOutcome::Full,
    };

    let mut file = tokio::fs::File::open(&video.path).await?;

    let (status, start, end) = match outcome {
        RangeOutcome::Full => (StatusCode::OK, 0, total.saturating_sub(1)),
        RangeOutcome::Partial { start, end } => (StatusCode::PARTIAL_CONTENT, start, end),
    };

    if start > 0 {
        file.seek(SeekFrom::Start(start)).await?;
    }
    let content_length = end - start + 1;
    let body = Body::from_stream(ReaderStream::new(file.take(content_length)));

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, &video.content_type)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CONTENT_LENGTH, content_length);

    if status == StatusCode::PARTIAL_CONTENT {
        builder = builder.header(
            header::CONTENT_RANGE,
            format!("bytes {}-{}/{}", start, end, total),
        );
    }

    builder
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build stream response: {}", e)))
}

/// Thumbnail for the active video; not generated yet, so always empty
#[utoipa::path(
    get,
    path = "/api/video-thumbnail",
    responses((status = 204, description = "No thumbnail available")),
    tag = "videos"
)]
pub async fn video_thumbnail() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::features::videos::repository::InMemoryVideoRepository;
    use crate::modules::storage::LocalStorageClient;
    use crate::shared::test_helpers::with_employer_auth;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    async fn test_fixture(dir: &std::path::Path) -> (TestServer, Arc<VideoService>) {
        let storage = Arc::new(LocalStorageClient::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().to_string(),
            public_base: "/uploads".to_string(),
        }));
        storage.ensure_dirs_exist().await.unwrap();
        let service = Arc::new(VideoService::new(
            Arc::new(InMemoryVideoRepository::new()),
            storage,
        ));

        let router = crate::features::videos::routes::public_routes(Arc::clone(&service)).merge(
            with_employer_auth(crate::features::videos::routes::protected_routes(
                Arc::clone(&service),
            )),
        );
        (TestServer::new(router).unwrap(), service)
    }

    fn video_form(bytes: Vec<u8>) -> MultipartForm {
        MultipartForm::new().add_part(
            "video",
            Part::bytes(bytes)
                .file_name("intro.mp4")
                .mime_type("video/mp4"),
        )
    }

    #[tokio::test]
    async fn test_upload_leaves_exactly_one_active() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, service) = test_fixture(tmp.path()).await;

        let first = server
            .post("/api/videos/upload")
            .multipart(video_form(vec![1u8; 64]))
            .await;
        assert_eq!(first.status_code(), StatusCode::CREATED);

        let second = server
            .post("/api/videos/upload")
            .multipart(video_form(vec![2u8; 64]))
            .await;
        assert_eq!(second.status_code(), StatusCode::CREATED);
        let uploaded: ApiResponse<VideoResponseDto> = second.json();
        let latest_id = uploaded.data.unwrap().id;

        let all = service.list().await.unwrap();
        let active: Vec<_> = all.iter().filter(|v| v.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, latest_id);
    }

    #[tokio::test]
    async fn test_activate_switches_the_active_video() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, service) = test_fixture(tmp.path()).await;

        let first = service.upload("video/mp4", b"aaaa", "user-1").await.unwrap();
        service.upload("video/mp4", b"bbbb", "user-1").await.unwrap();

        let response = server
            .post(&format!("/api/videos/{}/activate", first.id))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let all = service.list().await.unwrap();
        let active: Vec<_> = all.iter().filter(|v| v.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first.id);
    }

    #[tokio::test]
    async fn test_upload_without_video_field_is_400() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, _) = test_fixture(tmp.path()).await;

        let response = server
            .post("/api/videos/upload")
            .multipart(MultipartForm::new().add_text("note", "no file here"))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stream_without_active_video_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, _) = test_fixture(tmp.path()).await;

        let response = server.get("/api/introduction-video").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_stream_returns_whole_file() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, service) = test_fixture(tmp.path()).await;
        service
            .upload("video/mp4", &vec![7u8; 1000], "user-1")
            .await
            .unwrap();

        let response = server.get("/api/introduction-video").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.header(header::ACCEPT_RANGES).to_str().unwrap(),
            "bytes"
        );
        assert_eq!(response.as_bytes().len(), 1000);
    }

    #[tokio::test]
    async fn test_range_request_returns_partial_content() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, service) = test_fixture(tmp.path()).await;
        let bytes: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
        service.upload("video/mp4", &bytes, "user-1").await.unwrap();

        let response = server
            .get("/api/introduction-video")
            .add_header(header::RANGE, "bytes=0-99")
            .await;

        assert_eq!(response.status_code(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            response.header(header::CONTENT_RANGE).to_str().unwrap(),
            "bytes 0-99/1000"
        );
        assert_eq!(response.as_bytes().as_ref(), &bytes[0..100]);
    }

    #[tokio::test]
    async fn test_range_past_eof_is_416() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, service) = test_fixture(tmp.path()).await;
        service
            .upload("video/mp4", &vec![1u8; 1000], "user-1")
            .await
            .unwrap();

        let response = server
            .get("/api/introduction-video")
            .add_header(header::RANGE, "bytes=1000-")
            .await;

        assert_eq!(response.status_code(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(
            response.header(header::CONTENT_RANGE).to_str().unwrap(),
            "bytes */1000"
        );
    }

    #[tokio::test]
    async fn test_thumbnail_is_204() {
        let tmp = tempfile::tempdir().unwrap();
        let (server, _) = test_fixture(tmp.path()).await;

        let response = server.get("/api/video-thumbnail").await;
        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    }
}
