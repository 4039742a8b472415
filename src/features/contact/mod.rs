//! Contact-form intake.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact` | No | Submit a contact message |
//! | GET | `/api/contact-messages` | Yes | List stored messages |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{ContactMessageRepository, InMemoryContactMessageRepository};
pub use services::ContactService;
