use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::videos::handlers;
use crate::features::videos::services::VideoService;

/// Public video listing and streaming
pub fn public_routes(service: Arc<VideoService>) -> Router {
    Router::new()
        .route("/api/videos", get(handlers::list_videos))
        .route(
            "/api/introduction-video",
            get(handlers::stream_introduction_video),
        )
        .route("/api/video-thumbnail", get(handlers::video_thumbnail))
        .with_state(service)
}

/// Employer-only upload and activation
pub fn protected_routes(service: Arc<VideoService>) -> Router {
    Router::new()
        .route("/api/videos/upload", post(handlers::upload_video))
        .route("/api/videos/{id}/activate", post(handlers::activate_video))
        .with_state(service)
}
