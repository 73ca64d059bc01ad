//! Process configuration read from the environment.

mod timeouts;

pub use timeouts::TimeoutConfig;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const APP_DIR_NAME: &str = "habitflow";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Cannot determine a data directory; set DATABASE_URL and HABITFLOW_LOG_DIR")]
    NoDataDir,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_dir: PathBuf,
    pub timeouts: TimeoutConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("HABITFLOW_HOST", &lookup, || {
            IpAddr::from_str(DEFAULT_HOST).map_err(|_| ConfigError::InvalidValue {
                key: "HABITFLOW_HOST",
                value: DEFAULT_HOST.to_string(),
            })
        })?;
        let port = parse_or("HABITFLOW_PORT", &lookup, || Ok(DEFAULT_PORT))?;
        let request_timeout: u64 = parse_or("HABITFLOW_REQUEST_TIMEOUT_SECS", &lookup, || {
            Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
        })?;
        let db_max_connections: u32 = parse_or("HABITFLOW_DB_MAX_CONNECTIONS", &lookup, || {
            Ok(DEFAULT_DB_MAX_CONNECTIONS)
        })?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "HABITFLOW_DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let database_url = match non_empty(lookup("DATABASE_URL")) {
            Some(url) => url,
            None => {
                let path = data_dir()?.join("habitflow.db");
                let url = format!("sqlite://{}", path.display());
                info!("DATABASE_URL not set, defaulting to {}", url);
                url
            }
        };

        let log_dir = match non_empty(lookup("HABITFLOW_LOG_DIR")) {
            Some(dir) => PathBuf::from(dir),
            None => data_dir()?.join("logs"),
        };

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            log_dir,
            timeouts: TimeoutConfig::new()
                .with_http_request(Duration::from_secs(request_timeout)),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_or<T, F, D>(key: &'static str, lookup: &F, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => default(),
    }
}

fn data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HABITFLOW_HOST", "127.0.0.1"),
            ("HABITFLOW_PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("HABITFLOW_LOG_DIR", "/tmp/habitflow-logs"),
            ("HABITFLOW_REQUEST_TIMEOUT_SECS", "5"),
            ("HABITFLOW_DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/habitflow-logs"));
        assert_eq!(config.timeouts.http_request, Duration::from_secs(5));
        assert_eq!(config.db_max_connections, 2);
    }

    #[test]
    fn test_defaults_for_network_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HABITFLOW_LOG_DIR", "logs"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.timeouts.http_request, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("HABITFLOW_PORT", "eighty"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("HABITFLOW_LOG_DIR", "logs"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "HABITFLOW_PORT", .. }
        ));
    }

    #[test]
    fn test_zero_connections_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            ("HABITFLOW_DB_MAX_CONNECTIONS", "0"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("HABITFLOW_LOG_DIR", "logs"),
        ]));
        assert!(result.is_err());
    }
}
