use std::env;
use std::time::Duration;

use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please define the {0} environment variable inside .env.<development/production>.local")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub environment: String,
    pub port: u16,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub allowed_origins: String,
}

impl Config {
    /// Loads `.env.<env>.local` and `.env` (existing variables win), then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_files();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = read("DB_URI").ok_or(ConfigError::Missing("DB_URI"))?;

        Ok(Self {
            database_url,
            environment: read("RUST_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port: parse_or("PORT", read("PORT"), DEFAULT_PORT)?,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                read("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                read("DB_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            allowed_origins: read("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn load_dotenv_files() {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
    for file in [format!(".env.{}.local", environment), ".env".to_string()] {
        if dotenvy::from_filename(&file).is_ok() {
            tracing::debug!("Loaded environment from {}", file);
        }
    }
}
