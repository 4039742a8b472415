//! Site settings (singleton row).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/site-settings` | No | Fetch settings |
//! | POST | `/api/site-settings/youtube` | Yes | Update the YouTube URL |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemorySiteSettingsRepository, SiteSettingsRepository};
pub use services::SiteSettingsService;
