use std::env::var;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while getting {0} env param")]
    Missing(&'static str),
    #[error("An error occured while parsing {0} env param")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    /// Postgres connection string. Without it the in-memory store is used.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Config {
            port: required("PORT")?
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            scheme: required("SCHEME")?,
            host: required("HOST")?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(value) => value
                    .parse::<u32>()
                    .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
                None => DEFAULT_DATABASE_MAX_CONNECTIONS,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn parses_required_params_with_defaults() {
        let config = parse(&[("PORT", "8000"), ("SCHEME", "http"), ("HOST", "localhost")]).unwrap();

        assert_eq!(config.server_url(), "http://localhost:8000");
        assert_eq!(config.bind_addr(), "localhost:8000");
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn empty_database_url_means_in_memory() {
        let config = parse(&[
            ("PORT", "8000"),
            ("SCHEME", "http"),
            ("HOST", "localhost"),
            ("DATABASE_URL", ""),
        ])
        .unwrap();

        assert_eq!(config.database_url, None);
    }

    #[test]
    fn missing_port_is_reported() {
        let err = parse(&[("SCHEME", "http"), ("HOST", "localhost")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PORT"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = parse(&[("PORT", "eighty"), ("SCHEME", "http"), ("HOST", "localhost")])
            .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));
    }
}
