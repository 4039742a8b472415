use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Public contact-form route
pub fn public_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::create_message))
        .with_state(service)
}

/// Employer-only message listing
pub fn protected_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact-messages", get(handlers::list_messages))
        .with_state(service)
}
