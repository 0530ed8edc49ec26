//! Environment-based application configuration.

use std::{fmt::Display, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::security::rate_limit::RateLimitConfig,
};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            _ => Err("expected 'development' or 'production'".to_string()),
        }
    }
}

/// Settings for the request security pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Origins allowed to make credentialed cross-origin requests; empty allows any
    /// origin without credentials.
    pub cors_allowed_origins: Vec<String>,
    pub body_limit_bytes: usize,
    pub rate_limit: RateLimitConfig,
    /// Query keys that may legitimately repeat.
    pub hpp_whitelist: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: Vec::new(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            rate_limit: RateLimitConfig::default(),
            hpp_whitelist: Vec::new(),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub environment: AppEnv,
    /// Serve the OpenAPI document and Swagger UI under `/api-docs`.
    pub api_docs: bool,
    pub security: SecurityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Unset and blank variables fall back to their defaults; only `DATABASE_URL` is
    /// required.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let default_limit = RateLimitConfig::default();
        let window_ms: u64 = parse_non_zero(
            &var,
            "RATE_LIMIT_WINDOW_MS",
            default_limit.window.as_millis() as u64,
        )?;
        let max: u32 = parse_non_zero(&var, "RATE_LIMIT_MAX", default_limit.max)?;

        Ok(Self {
            database_url,
            port: parse_or(&var, "PORT", DEFAULT_PORT)?,
            environment: parse_or(&var, "APP_ENV", AppEnv::Development)?,
            api_docs: parse_or(&var, "API_DOCS", true)?,
            security: SecurityConfig {
                cors_allowed_origins: list(&var, "CORS_ALLOWED_ORIGINS"),
                body_limit_bytes: parse_or(&var, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?,
                rate_limit: RateLimitConfig {
                    window: Duration::from_millis(window_ms),
                    max,
                },
                hpp_whitelist: list(&var, "HPP_WHITELIST"),
            },
        })
    }

    /// Session cookies are only marked `Secure` in production.
    pub fn secure_cookies(&self) -> bool {
        self.environment == AppEnv::Production
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = var(name) else {
        return Ok(default);
    };

    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

/// Like [`parse_or`], but zero is rejected.
///
/// A zero-length rate-limit window would start a new window on every request, and a
/// zero maximum would reject everything.
fn parse_non_zero<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(var, name, default)?;

    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: var(name).unwrap_or_default(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(value)
}

/// Reads a comma-separated list, dropping blank entries.
fn list<F>(var: &F, name: &str) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
