//! Environment configuration.
//!
//! | variable       | default    |                                          |
//! |----------------|------------|------------------------------------------|
//! | `HOST`         | `0.0.0.0`  | bind address                             |
//! | `PORT`         | `8000`     | bind port                                |
//! | `DATABASE_URL` | unset      | `memory://` or `file://<path>`           |
//! | `DATABASE_NAME`| `pizza`    | name reported by the store               |
//! | `STORE_BUFFER` | `32`       | capacity of the store actor's channel    |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::ConfigurationError;
use crate::persistence::StoreBackend;

pub const DEFAULT_DATABASE_NAME: &str = "pizza";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub backend: StoreBackend,
    pub store_buffer: usize,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = var("DATABASE_URL");
        let backend = match &database_url {
            Some(url) => url.parse()?,
            None => StoreBackend::default(),
        };

        let store_buffer: usize = try_load(var("STORE_BUFFER"), "STORE_BUFFER", "32")?;
        if store_buffer == 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "STORE_BUFFER",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: try_load(var("PORT"), "PORT", "8000")?,
            database_url,
            database_name: var("DATABASE_NAME"),
            backend,
            store_buffer,
        })
    }

    pub fn database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: None,
            backend: StoreBackend::Memory,
            store_buffer: 32,
        }
    }
}

fn try_load<T: FromStr>(value: Option<String>, key: &'static str, default: &str) -> Result<T, ConfigurationError>
where
    T::Err: Display,
{
    let value = value.unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigurationError::InvalidValue { key, value }
    })
}
