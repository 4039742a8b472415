//! Natural-language → SQL translation demo.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/translate-sql` | No | Translate a request into SQL |
//! | GET | `/api/sql-queries` | No | 10 most recent exchanges |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemorySqlQueryRepository, SqlQueryRepository};
pub use services::SqlTranslationService;
