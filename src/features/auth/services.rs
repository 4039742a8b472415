use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::model::{AuthenticatedUser, TokenClaims};
use crate::features::auth::repository::UserRepository;
use crate::shared::constants::EMPLOYER_ROLE;

/// Issues and validates server-signed HS256 bearer tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_secs: config.token_ttl.as_secs(),
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Issue an employer token for the given user; returns (token, expires_in)
    pub fn issue_token(&self, user_id: &str, email: &str) -> Result<(String, u64)> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles: vec![EMPLOYER_ROLE.to_string()],
            iat: now,
            exp: now + self.token_ttl_secs as i64,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.token_ttl_secs))
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;
        Ok(AuthenticatedUser {
            sub: claims.sub,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

/// Employer login against the configured credential store
pub struct AuthService {
    config: AuthConfig,
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(config: AuthConfig, users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self {
            config,
            users,
            tokens,
        }
    }

    /// Verify credentials, ensure the user record exists, and issue a token
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        if !self.credentials_match(&dto.email, &dto.password) {
            tracing::warn!("Rejected login attempt for {}", dto.email);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        // User records are created on demand at first successful login
        let user = match self.users.find_by_email(&dto.email).await? {
            Some(user) => user,
            None => {
                let name = dto.email.split('@').next().unwrap_or("employer");
                let user = self.users.create(&dto.email, name).await?;
                tracing::info!("User record created on demand: id={}", user.id);
                user
            }
        };

        let (token, expires_in) = self.tokens.issue_token(&user.id.to_string(), &user.email)?;

        tracing::info!("Employer login successful: {}", user.email);

        Ok(LoginResponseDto {
            token,
            expires_in,
            user: user.into(),
        })
    }

    fn credentials_match(&self, email: &str, password: &str) -> bool {
        let digest = hex::encode(Sha256::digest(password.as_bytes()));
        email == self.config.admin_email && digest == self.config.admin_password_sha256
    }
}
