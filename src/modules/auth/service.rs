use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::modules::users::repository::UserRepository;
use crate::shared::config::Config;
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iss: String,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and verifies HS256 bearer tokens with a key handed in at startup.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expires_in: u64,
}

impl TokenService {
    pub fn new(secret: &str, issuer: impl Into<String>, expires_in: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            expires_in,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_issuer.clone(), config.jwt_expires_in)
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    pub fn issue(&self, username: &str) -> AppResult<String> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        let claims = Claims {
            username: username.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.expires_in,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("JWT generation failed: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token_type: &'static str,
    pub expires_in: u64,
    pub access_token: String,
}

pub struct AuthService;

impl AuthService {
    pub async fn login(
        users: &dyn UserRepository,
        tokens: &TokenService,
        request: LoginRequest,
    ) -> AppResult<LoginResponse> {
        let user = users
            .find_by_username(&request.username)
            .await?
            .filter(|u| u.password_matches(&request.password))
            .ok_or(AppError::InvalidCredentials)?;

        let access_token = tokens.issue(&user.username)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            token_type: "Bearer",
            expires_in: tokens.expires_in(),
            access_token,
        })
    }
}
