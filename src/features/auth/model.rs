use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Principal extracted from a validated bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// User record id
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if this principal may use the employer/admin endpoints
    pub fn is_employer(&self) -> bool {
        self.has_role(crate::shared::constants::EMPLOYER_ROLE)
    }
}

/// JWT claims carried by server-issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}
