use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::resume::handlers;
use crate::features::resume::services::ResumeService;

/// Public resume download
pub fn public_routes(service: Arc<ResumeService>) -> Router {
    Router::new()
        .route("/api/resume", get(handlers::download_resume))
        .with_state(service)
}

/// Employer-only resume upload
pub fn protected_routes(service: Arc<ResumeService>) -> Router {
    Router::new()
        .route("/api/resume/upload", post(handlers::upload_resume))
        .with_state(service)
}
