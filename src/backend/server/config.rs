/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary before this runs). Every value has a development default:
 *
 * | Variable       | Default                            |
 * |----------------|------------------------------------|
 * | `DATABASE_URL` | `sqlite://linkcrawler.db?mode=rwc` |
 * | `JWT_SECRET`   | `dev_secret_change_me`             |
 * | `PORT`         | `4000`                             |
 * | `BIND_ADDR`    | `0.0.0.0`                          |
 * | `BCRYPT_COST`  | `10`                               |
 *
 * The defaults are insecure and must be overridden outside development.
 *
 * # Error Handling
 *
 * Unlike optional services, a bad value here is fatal: `from_env` returns a
 * `ConfigError` and the server refuses to start.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://linkcrawler.db?mode=rwc";
pub const DEFAULT_JWT_SECRET: &str = "dev_secret_change_me";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection string for the SQLite database
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or(defaults.database_url);
        let jwt_secret = get("JWT_SECRET").unwrap_or(defaults.jwt_secret);

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|e| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => {
                let cost = value.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                    key: "BCRYPT_COST",
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::InvalidValue {
                        key: "BCRYPT_COST",
                        value,
                        reason: "must be between 4 and 31".to_string(),
                    });
                }
                cost
            }
            None => defaults.bcrypt_cost,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            port,
            bcrypt_cost,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Whether the signing secret is still the development default
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
