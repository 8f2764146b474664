use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::info;

pub const DEFAULT_DATABASE_URL: &str = "mysql://demo:demo123@db/registry";

#[derive(Debug, thiserror::Error)]
#[error("invalid value '{value}' for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Create missing tables at startup.
    pub migrate: bool,
    /// Connection attempts of the startup migration.
    pub migrate_attempts: u32,
    pub migrate_retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            migrate: true,
            migrate_attempts: 30,
            migrate_retry_delay: Duration::from_secs(2),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| {
                info!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
                defaults.database_url
            }),
            max_connections: try_load(&lookup, "REGISTRY_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(try_load(
                &lookup,
                "REGISTRY_ACQUIRE_TIMEOUT",
                defaults.acquire_timeout.as_secs(),
            )?),
            migrate: try_load(&lookup, "REGISTRY_MIGRATE", defaults.migrate)?,
            migrate_attempts: try_load(
                &lookup,
                "REGISTRY_MIGRATE_ATTEMPTS",
                defaults.migrate_attempts,
            )?,
            migrate_retry_delay: Duration::from_secs(try_load(
                &lookup,
                "REGISTRY_MIGRATE_RETRY_DELAY",
                defaults.migrate_retry_delay.as_secs(),
            )?),
        })
    }

    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
