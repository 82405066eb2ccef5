use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_connect_timeout: u64,
    pub database_idle_timeout: u64,
    pub server_host: String,
    pub server_port: u16,
    pub rust_log: String,
    pub app_env: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Token lifetime in seconds. Also reported to clients as `expires_in`.
    pub jwt_expires_in: u64,
    pub seed_username: Option<String>,
    pub seed_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
        let is_dev = app_env == "dev";

        // In dev the in-memory repositories are used, so no database is needed
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) if is_dev => String::new(),
            Err(_) => return Err(ConfigError::Missing("DATABASE_URL")),
        };

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if is_dev => "dev-secret-change-me".to_string(),
            _ => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 100)?,
            database_min_connections: parse_var("DATABASE_MIN_CONNECTIONS", 5)?,
            database_connect_timeout: parse_var("DATABASE_CONNECT_TIMEOUT", 8)?,
            database_idle_timeout: parse_var("DATABASE_IDLE_TIMEOUT", 8)?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", 8080)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            app_env,
            jwt_secret,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "courier-backend".to_string()),
            jwt_expires_in: parse_var("JWT_EXPIRES_IN", 432_000)?,
            seed_username: env::var("SEED_USERNAME").ok().filter(|v| !v.is_empty()),
            seed_password: env::var("SEED_PASSWORD").ok(),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.app_env == "dev"
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            database_url: String::new(),
            database_max_connections: 100,
            database_min_connections: 5,
            database_connect_timeout: 8,
            database_idle_timeout: 8,
            server_host: "localhost".to_string(),
            server_port: 8080,
            rust_log: "info".to_string(),
            app_env: "test".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_issuer: "courier-backend".to_string(),
            jwt_expires_in: 3600,
            seed_username: None,
            seed_password: None,
        }
    }
}
