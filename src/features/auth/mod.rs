//! Employer authentication.
//!
//! The original site gated its admin page with a hard-coded client-side
//! credential check; here the server verifies the configured employer
//! credentials and issues an HS256 bearer token that protects the upload
//! and settings endpoints.

pub mod dtos;
pub mod handlers;
pub mod model;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemoryUserRepository, UserRepository};
pub use services::{AuthService, TokenService};
