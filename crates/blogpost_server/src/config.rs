//! Process configuration read from the environment.
//!
//! Empty or whitespace-only values count as unset.

use blogpost_core::default_log_level;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DB_PATH_ENV: &str = "BLOGPOST_DB_PATH";
const HTTP_ADDR_ENV: &str = "BLOGPOST_HTTP_ADDR";
const RPC_ADDR_ENV: &str = "BLOGPOST_RPC_ADDR";
const LOG_LEVEL_ENV: &str = "BLOGPOST_LOG_LEVEL";
const LOG_DIR_ENV: &str = "BLOGPOST_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "blogpost.sqlite3";
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RPC_ADDR: &str = "0.0.0.0:9001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} `{value}`: {source}")]
    InvalidAddr {
        key: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: PathBuf,
    pub http_addr: SocketAddr,
    pub rpc_addr: SocketAddr,
    pub log_level: String,
    /// `None` logs to stderr only.
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = get(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

        Ok(Self {
            db_path,
            http_addr: parse_addr(HTTP_ADDR_ENV, get(HTTP_ADDR_ENV), DEFAULT_HTTP_ADDR)?,
            rpc_addr: parse_addr(RPC_ADDR_ENV, get(RPC_ADDR_ENV), DEFAULT_RPC_ADDR)?,
            log_level: get(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: get(LOG_DIR_ENV),
        })
    }
}

fn parse_addr(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<SocketAddr, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddr { key, value, source })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = ServerConfig::from_lookup(lookup(&[("BLOGPOST_LOG_DIR", "  ")])).unwrap();
        assert_eq!(config.http_addr.port(), 8080);
        assert_eq!(config.rpc_addr.port(), 9001);
        assert!(config.db_path.ends_with("blogpost.sqlite3"));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BLOGPOST_DB_PATH", " /var/lib/blogpost.db "),
            ("BLOGPOST_HTTP_ADDR", "127.0.0.1:3000"),
            ("BLOGPOST_LOG_LEVEL", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/blogpost.db"));
        assert_eq!(config.http_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn malformed_address_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("BLOGPOST_RPC_ADDR", "localhost")]))
            .unwrap_err();
        let ConfigError::InvalidAddr { key, .. } = err;
        assert_eq!(key, "BLOGPOST_RPC_ADDR");
    }
}
