use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User record, created on demand at first successful login
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
