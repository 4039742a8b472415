//! Resume document upload and download.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/resume` | No | Download the current resume |
//! | POST | `/api/resume/upload` | Yes | Upload a new resume |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemoryResumeRepository, ResumeRepository};
pub use services::ResumeService;
