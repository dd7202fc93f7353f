/*
 * Responsibility
 * - Load settings from the environment (.env is optional)
 * - Validate values (an unparsable value fails startup)
 */
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes
    /// `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host: IpAddr = match lookup("HOST") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("HOST"))?,
            None => defaults.addr.ip(),
        };

        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => defaults.addr.port(),
        };

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECS")),
            },
            None => defaults.request_timeout,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            app_env,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();

        assert_eq!(config.addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn host_and_port_are_read() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "3000")]).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let config = load(&[("HOST", "::1"), ("PORT", "9000")]).unwrap();

        assert_eq!(config.addr, "[::1]:9000".parse().unwrap());
    }

    #[test]
    fn invalid_port_fails() {
        assert_eq!(
            load(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            load(&[("PORT", "70000")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
    }

    #[test]
    fn invalid_host_fails() {
        assert_eq!(
            load(&[("HOST", "localhost:80")]).unwrap_err(),
            ConfigError::Invalid("HOST")
        );
    }

    #[test]
    fn zero_timeout_fails() {
        assert_eq!(
            load(&[("REQUEST_TIMEOUT_SECS", "0")]).unwrap_err(),
            ConfigError::Invalid("REQUEST_TIMEOUT_SECS")
        );
    }

    #[test]
    fn app_env_parsing() {
        for (raw, expected) in [
            ("production", AppEnv::Production),
            ("PROD", AppEnv::Production),
            ("development", AppEnv::Development),
            ("staging", AppEnv::Development),
        ] {
            let config = load(&[("APP_ENV", raw)]).unwrap();
            assert_eq!(config.app_env, expected, "APP_ENV={raw}");
        }
        assert!(AppEnv::Production.is_production());
        assert!(!AppEnv::Development.is_production());
    }
}
