use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_IDENTITY_LOOKUP_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:lookup";
const DEFAULT_PAYMENT_API_URL: &str = "https://api.stripe.com";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RATING_CONCURRENCY: usize = 8;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub identity_api_key: String,
    pub identity_lookup_url: String,

    pub payment_secret_key: String,
    pub payment_api_url: String,

    pub query: QuerySettings,
}

/// Limits applied to store reads on the scholarship search and rating paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    /// Upper bound for a single store call.
    pub store_timeout: Duration,
    /// Maximum number of rating reads in flight for one result page.
    pub rating_concurrency: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
            rating_concurrency: DEFAULT_RATING_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let store_timeout_secs: u64 = parse_optional(
            "STORE_TIMEOUT_SECS",
            std::env::var("STORE_TIMEOUT_SECS").ok(),
            DEFAULT_STORE_TIMEOUT_SECS,
        )?;
        let rating_concurrency: usize = parse_optional(
            "RATING_CONCURRENCY",
            std::env::var("RATING_CONCURRENCY").ok(),
            DEFAULT_RATING_CONCURRENCY,
        )?;

        if store_timeout_secs == 0 {
            return Err(invalid("STORE_TIMEOUT_SECS", "0").into());
        }
        if rating_concurrency == 0 {
            return Err(invalid("RATING_CONCURRENCY", "0").into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            identity_api_key: required("IDENTITY_API_KEY")?,
            identity_lookup_url: std::env::var("IDENTITY_LOOKUP_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_LOOKUP_URL.to_string()),
            payment_secret_key: required("PAYMENT_SECRET_KEY")?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_API_URL.to_string()),
            query: QuerySettings {
                store_timeout: Duration::from_secs(store_timeout_secs),
                rating_concurrency,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Parses an optional environment value, falling back to `default` when unset.
fn parse_optional<T: FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| invalid(name, &raw)),
    }
}
