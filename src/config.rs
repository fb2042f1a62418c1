use std::env;

use crate::errors::StartupError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_max_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(StartupError::MissingVar("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| StartupError::InvalidVar {
                name: "PORT",
                expected: "a valid port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let pool_max_size = match lookup("DB_POOL_MAX_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(StartupError::InvalidVar {
                        name: "DB_POOL_MAX_SIZE",
                        expected: "a positive integer",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_POOL_MAX_SIZE,
        };

        Ok(Self {
            database_url,
            host,
            port,
            pool_max_size,
        })
    }
}
