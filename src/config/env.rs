// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use actix_web::http::Uri;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    /// None selects the in-memory catalog (development only)
    pub database_url: Option<String>,

    /// Server bind address (e.g., "127.0.0.1" or "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,

    /// Apply embedded SQL migrations at startup
    pub run_migrations: bool,

    /// Object storage project URL (e.g., https://xyz.supabase.co)
    pub storage_url: Option<String>,

    /// Service role key used for storage writes
    pub storage_service_key: Option<String>,

    /// Base URL used for public links when objects are kept in memory
    pub public_base_url: String,

    /// Bucket holding gallery images
    pub gallery_bucket: String,

    /// Bucket holding tour card images
    pub tour_bucket: String,

    /// Bucket holding journey images and videos
    pub journey_bucket: String,

    /// Upper bound for a single multipart request body
    pub max_upload_bytes: usize,

    /// Back office login credentials
    pub admin_email: String,
    pub admin_password: String,

    /// When set, mutating admin routes require X-Admin-Token
    pub admin_token: Option<String>,

    /// Login attempts allowed per minute across all clients
    pub login_attempts_per_minute: u32,

    /// Single origin allowed by CORS (permissive when unset)
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        let server_port = parse_var("SERVER_PORT", 3000);

        Config {
            database_url: optional_var("DATABASE_URL"),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port,

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10),

            db_connection_timeout: parse_var("DB_CONNECTION_TIMEOUT", 30),

            run_migrations: parse_var("RUN_MIGRATIONS", true),

            storage_url: optional_var("STORAGE_URL").map(|u| u.trim_end_matches('/').to_string()),

            storage_service_key: optional_var("STORAGE_SERVICE_KEY"),

            public_base_url: optional_var("PUBLIC_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| format!("http://localhost:{}", server_port)),

            gallery_bucket: env::var("GALLERY_BUCKET").unwrap_or_else(|_| "cardPics".to_string()),

            tour_bucket: env::var("TOUR_BUCKET").unwrap_or_else(|_| "cardPics".to_string()),

            journey_bucket: env::var("JOURNEY_BUCKET").unwrap_or_else(|_| "journey".to_string()),

            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", 50 * 1024 * 1024),

            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string()),

            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string()),

            admin_token: optional_var("ADMIN_TOKEN"),

            login_attempts_per_minute: parse_var("LOGIN_ATTEMPTS_PER_MINUTE", 10),

            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Both storage settings are needed to talk to the hosted storage API
    pub fn storage_credentials(&self) -> Option<(&str, &str)> {
        match (&self.storage_url, &self.storage_service_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.server_port == 0 {
            return Err("SERVER_PORT must be greater than zero".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("MAX_UPLOAD_BYTES must be greater than zero".to_string());
        }

        if self.login_attempts_per_minute == 0 {
            return Err("LOGIN_ATTEMPTS_PER_MINUTE must be greater than zero".to_string());
        }

        if let Some(origin) = &self.cors_allowed_origin {
            if !is_valid_origin(origin) {
                return Err(format!(
                    "CORS_ALLOWED_ORIGIN must be a single scheme://host[:port] origin, got {}",
                    origin
                ));
            }
        }

        if self.is_production() {
            if self.database_url.is_none() {
                return Err("DATABASE_URL is required in production".to_string());
            }
            if self.storage_credentials().is_none() {
                return Err(
                    "STORAGE_URL and STORAGE_SERVICE_KEY are required in production".to_string(),
                );
            }
        }

        if self.database_url.is_none() {
            log::warn!("DATABASE_URL not configured - using in-memory catalog, data is lost on restart");
        }

        if self.storage_credentials().is_none() {
            log::warn!("Storage credentials not configured - uploads are kept in memory");
        }

        if self.admin_password == "change-me" {
            log::warn!("ADMIN_PASSWORD not configured - using the development default");
        }

        Ok(())
    }
}

/// An exact browser origin such as `https://sibtaini.example`
/// Wildcards, paths and trailing slashes are rejected
fn is_valid_origin(origin: &str) -> bool {
    let Ok(uri) = origin.parse::<Uri>() else {
        return false;
    };

    match (uri.scheme_str(), uri.authority()) {
        (Some(scheme @ ("http" | "https")), Some(authority)) => {
            origin == format!("{}://{}", scheme, authority)
        }
        _ => false,
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        database_url: None,
        server_address: "127.0.0.1".to_string(),
        server_port: 3000,
        environment: "test".to_string(),
        log_level: "info".to_string(),
        db_max_connections: 1,
        db_connection_timeout: 1,
        run_migrations: false,
        storage_url: None,
        storage_service_key: None,
        public_base_url: "http://localhost:3000".to_string(),
        gallery_bucket: "cardPics".to_string(),
        tour_bucket: "cardPics".to_string(),
        journey_bucket: "journey".to_string(),
        max_upload_bytes: 1024 * 1024,
        admin_email: "admin@example.com".to_string(),
        admin_password: "secret".to_string(),
        admin_token: None,
        login_attempts_per_minute: 10,
        cors_allowed_origin: None,
    }
}
