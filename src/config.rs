use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "restaurants.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Config {
    /// Reads the configuration from the process environment. Call
    /// `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_size = parse_or("DATABASE_POOL_SIZE", &lookup, DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", &lookup, DEFAULT_PORT)?,
            pool_size,
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                database_url: "restaurants.db".to_string(),
                host: "127.0.0.1".to_string(),
                port: 8080,
                pool_size: 8,
            }
        );
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "/tmp/food.db"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("DATABASE_POOL_SIZE", "2"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "/tmp/food.db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_empty_pool() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_POOL_SIZE", "0")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_POOL_SIZE"));
    }
}
