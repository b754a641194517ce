// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "RENTAHOUSE_ADDR";
pub const WORKERS_VAR: &str = "RENTAHOUSE_WORKERS";
pub const VISITOR_TTL_VAR: &str = "RENTAHOUSE_VISITOR_TTL_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Idle visitors (open dialogs, queued toasts) are dropped after this long.
    pub visitor_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            visitor_ttl_secs: 60 * 60,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by whichever environment variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ADDR_VAR) {
            cfg.addr = parse(ADDR_VAR, "socket address", &v)?;
        }
        if let Some(v) = lookup(WORKERS_VAR) {
            cfg.max_workers = parse(WORKERS_VAR, "worker count", &v)?;
            if cfg.max_workers == 0 {
                return Err(invalid(WORKERS_VAR, "worker count", &v));
            }
        }
        if let Some(v) = lookup(VISITOR_TTL_VAR) {
            cfg.visitor_ttl_secs = parse(VISITOR_TTL_VAR, "number of seconds", &v)?;
            if cfg.visitor_ttl_secs <= 0 {
                return Err(invalid(VISITOR_TTL_VAR, "number of seconds", &v));
            }
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(var, expected, value))
}

fn invalid(var: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    }
}
