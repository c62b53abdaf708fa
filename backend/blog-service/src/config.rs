//! Configuration management for the blog service
//!
//! Settings are loaded from environment variables, with a `.env` file picked
//! up in debug builds for local development. The JWT secret and the database
//! URL are read once here and handed to the services at startup; nothing
//! reads the environment after boot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub cors: CorsSettings,
}

impl Settings {
    /// Load settings from environment variables (and `.env` in development)
    pub fn load() -> Result<Self> {
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            server: ServerSettings::from_env()?,
            database: DatabaseSettings::from_env()?,
            jwt: JwtSettings::from_env()?,
            cors: CorsSettings::from_env(),
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:blog.db".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,
        })
    }
}

/// JWT authentication settings
///
/// The secret is process-wide configuration established at startup; it is
/// handed to `TokenService::new` and never read again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSettings {
    pub secret: String,
    pub expiry_seconds: u64,
}

impl JwtSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            expiry_seconds: env::var("JWT_EXPIRY_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("Invalid JWT_EXPIRY_SECONDS")?,
        })
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: String,
}

impl CorsSettings {
    fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_settings_from_env() {
        env::set_var("JWT_SECRET", "test-secret-key");
        env::set_var("JWT_EXPIRY_SECONDS", "7200");

        let settings = JwtSettings::from_env().unwrap();
        assert_eq!(settings.secret, "test-secret-key");
        assert_eq!(settings.expiry_seconds, 7200);

        // Expiry falls back to one hour when unset
        env::remove_var("JWT_EXPIRY_SECONDS");
        let settings = JwtSettings::from_env().unwrap();
        assert_eq!(settings.expiry_seconds, 3600);

        env::remove_var("JWT_SECRET");
    }

    #[test]
    fn test_database_settings_from_env() {
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("DATABASE_MAX_CONNECTIONS", "2");

        let settings = DatabaseSettings::from_env().unwrap();

        assert_eq!(settings.url, "sqlite::memory:");
        assert_eq!(settings.max_connections, 2);

        env::remove_var("DATABASE_URL");
        env::remove_var("DATABASE_MAX_CONNECTIONS");
    }

    #[test]
    fn test_server_settings_defaults() {
        env::remove_var("SERVER_HOST");
        env::remove_var("SERVER_PORT");

        let settings = ServerSettings::from_env().unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
    }
}
