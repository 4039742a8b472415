mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::auth::InMemoryUserRepository;
use crate::features::contact::{routes as contact_routes, ContactService, InMemoryContactMessageRepository};
use crate::features::resume::{routes as resume_routes, InMemoryResumeRepository, ResumeService};
use crate::features::site_settings::{
    routes as site_settings_routes, InMemorySiteSettingsRepository, SiteSettingsService,
};
use crate::features::sql_translator::{
    routes as sql_translator_routes, InMemorySqlQueryRepository, SqlTranslationService,
};
use crate::features::videos::{routes as videos_routes, InMemoryVideoRepository, VideoService};
use crate::modules::storage::LocalStorageClient;
use crate::shared::llm::OpenAiClient;
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fails fast on missing secrets, including OPENAI_API_KEY
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Prepare local storage for uploaded binaries
    let storage = Arc::new(LocalStorageClient::new(&config.storage));
    storage.ensure_dirs_exist().await?;
    tracing::info!("Storage client initialized");

    // Auth services
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(
        config.auth.clone(),
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&token_service),
    ));
    tracing::info!("Auth service initialized");

    // Contact service
    let contact_service = Arc::new(ContactService::new(Arc::new(
        InMemoryContactMessageRepository::new(),
    )));
    tracing::info!("Contact service initialized");

    // SQL translation service
    let openai_client = Arc::new(
        OpenAiClient::new(config.openai.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize OpenAI client: {}", e))?,
    );
    let sql_translation_service = Arc::new(SqlTranslationService::new(
        openai_client,
        Arc::new(InMemorySqlQueryRepository::new()),
    ));
    tracing::info!("SQL translation service initialized (model: {})", config.openai.model);

    // Site settings service
    let site_settings_service = Arc::new(SiteSettingsService::new(Arc::new(
        InMemorySiteSettingsRepository::new(),
    )));
    tracing::info!("Site settings service initialized");

    // Video service
    let video_service = Arc::new(VideoService::new(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::clone(&storage),
    ));
    tracing::info!("Video service initialized");

    // Resume service
    let resume_service = Arc::new(ResumeService::new(
        Arc::new(InMemoryResumeRepository::new()),
        Arc::clone(&storage),
    ));
    tracing::info!("Resume service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(contact_routes::protected_routes(Arc::clone(
            &contact_service,
        )))
        .merge(site_settings_routes::protected_routes(Arc::clone(
            &site_settings_service,
        )))
        .merge(videos_routes::protected_routes(Arc::clone(&video_service)))
        .merge(resume_routes::protected_routes(Arc::clone(&resume_service)))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&token_service),
            middleware::auth_middleware,
        ));

    async fn root() -> axum::Json<serde_json::Value> {
        axum::Json(serde_json::json!({
            "service": "portfolio-api",
            "status": "running",
        }))
    }
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let base_routes = Router::new()
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(contact_routes::public_routes(contact_service))
        .merge(sql_translator_routes::routes(sql_translation_service))
        .merge(site_settings_routes::public_routes(site_settings_service))
        .merge(videos_routes::public_routes(video_service))
        .merge(resume_routes::public_routes(resume_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(base_routes)
        // Room for the 100MB video ceiling plus multipart framing
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
