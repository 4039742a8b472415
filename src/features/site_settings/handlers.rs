use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::site_settings::dtos::{SiteSettingsResponseDto, UpdateYoutubeUrlDto};
use crate::features::site_settings::services::SiteSettingsService;
use crate::shared::types::ApiResponse;

/// Fetch site settings
#[utoipa::path(
    get,
    path = "/api/site-settings",
    responses(
        (status = 200, description = "Current settings", body = ApiResponse<SiteSettingsResponseDto>)
    ),
    tag = "site-settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SiteSettingsService>>,
) -> Result<Json<ApiResponse<SiteSettingsResponseDto>>> {
    let settings = service.get().await?;
    Ok(Json(ApiResponse::success(Some(settings), None)))
}

/// Update the introduction YouTube URL (employer only)
#[utoipa::path(
    post,
    path = "/api/site-settings/youtube",
    request_body = UpdateYoutubeUrlDto,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<SiteSettingsResponseDto>),
        (status = 400, description = "Invalid YouTube URL"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "site-settings"
)]
pub async fn update_youtube_url(
    user: AuthenticatedUser,
    State(service): State<Arc<SiteSettingsService>>,
    AppJson(dto): AppJson<UpdateYoutubeUrlDto>,
) -> Result<Json<ApiResponse<SiteSettingsResponseDto>>> {
    let settings = service
        .update_youtube_url(&dto.youtube_url, &user.sub)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(settings),
        Some("Settings updated".to_string()),
    )))
}
