//! Introduction video upload, activation and range-aware streaming.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/videos` | No | List uploaded videos |
//! | GET | `/api/introduction-video` | No | Stream the active video |
//! | GET | `/api/video-thumbnail` | No | Thumbnail placeholder (204) |
//! | POST | `/api/videos/upload` | Yes | Upload and activate a video |
//! | POST | `/api/videos/{id}/activate` | Yes | Activate an existing video |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod range;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemoryVideoRepository, VideoRepository};
pub use services::VideoService;
