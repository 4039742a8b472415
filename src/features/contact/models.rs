use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Contact-form submission. Immutable once stored; there is no delivery
/// mechanism, the record only lives in process memory.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
