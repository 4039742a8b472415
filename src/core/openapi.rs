use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{self, dtos as auth_dtos};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::resume::{dtos as resume_dtos, handlers as resume_handlers};
use crate::features::site_settings::{
    dtos as site_settings_dtos, handlers as site_settings_handlers,
};
use crate::features::sql_translator::{
    dtos as sql_translator_dtos, handlers as sql_translator_handlers,
};
use crate::features::videos::{dtos as videos_dtos, handlers as videos_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Contact
        contact_handlers::create_message,
        contact_handlers::list_messages,
        // SQL translation
        sql_translator_handlers::translate_sql,
        sql_translator_handlers::list_queries,
        // Site settings
        site_settings_handlers::get_settings,
        site_settings_handlers::update_youtube_url,
        // Videos
        videos_handlers::list_videos,
        videos_handlers::stream_introduction_video,
        videos_handlers::video_thumbnail,
        videos_handlers::upload_video,
        videos_handlers::activate_video,
        // Resume
        resume_handlers::download_resume,
        resume_handlers::upload_resume,
    ),
    components(
        schemas(
            // Auth
            auth::model::AuthenticatedUser,
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::AuthUserDto,
            auth_dtos::MeResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::MeResponseDto>,
            // Contact
            contact_dtos::CreateContactMessageDto,
            contact_dtos::ContactMessageResponseDto,
            ApiResponse<contact_dtos::ContactMessageResponseDto>,
            ApiResponse<Vec<contact_dtos::ContactMessageResponseDto>>,
            // SQL translation
            sql_translator_dtos::TranslateSqlRequestDto,
            sql_translator_dtos::TranslateSqlResponseDto,
            sql_translator_dtos::SqlQueryResponseDto,
            ApiResponse<sql_translator_dtos::TranslateSqlResponseDto>,
            ApiResponse<Vec<sql_translator_dtos::SqlQueryResponseDto>>,
            // Site settings
            site_settings_dtos::UpdateYoutubeUrlDto,
            site_settings_dtos::SiteSettingsResponseDto,
            ApiResponse<site_settings_dtos::SiteSettingsResponseDto>,
            // Videos
            videos_dtos::UploadVideoForm,
            videos_dtos::VideoResponseDto,
            ApiResponse<videos_dtos::VideoResponseDto>,
            ApiResponse<Vec<videos_dtos::VideoResponseDto>>,
            // Resume
            resume_dtos::UploadResumeForm,
            resume_dtos::ResumeResponseDto,
            ApiResponse<resume_dtos::ResumeResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Employer authentication"),
        (name = "contact", description = "Contact form submissions"),
        (name = "sql-translator", description = "Natural language to SQL translation"),
        (name = "site-settings", description = "Site settings"),
        (name = "videos", description = "Introduction video upload and streaming"),
        (name = "resume", description = "Resume document upload and download"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "API documentation for the portfolio site backend",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
