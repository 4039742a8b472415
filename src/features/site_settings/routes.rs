use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::site_settings::handlers;
use crate::features::site_settings::services::SiteSettingsService;

/// Public read access to site settings
pub fn public_routes(service: Arc<SiteSettingsService>) -> Router {
    Router::new()
        .route("/api/site-settings", get(handlers::get_settings))
        .with_state(service)
}

/// Employer-only settings updates
pub fn protected_routes(service: Arc<SiteSettingsService>) -> Router {
    Router::new()
        .route(
            "/api/site-settings/youtube",
            post(handlers::update_youtube_url),
        )
        .with_state(service)
}
