//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Default document-store API base URL.
pub const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com";

/// API version header value sent with every page create.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the HTTP host binds to.
    pub bind_addr: String,
    /// Port the HTTP host listens on.
    pub port: u16,
    /// Base URL of the Notion API (overridden in tests).
    pub notion_api_base: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Transport timeout for the outbound write.
    pub notion_timeout: Duration,
    /// Prefix for env vars read by the env-backed parameter store.
    pub param_prefix: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            notion_api_base: DEFAULT_NOTION_API_BASE.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            notion_timeout: Duration::from_secs(30),
            param_prefix: String::new(),
        }
    }
}

impl RelayConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("WORKOUT_RELAY_PORT") {
            Some(raw) => parse_number::<u16>("WORKOUT_RELAY_PORT", &raw)?,
            None => defaults.port,
        };

        let notion_timeout = match lookup("NOTION_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number::<u64>("NOTION_TIMEOUT_SECS", &raw)?),
            None => defaults.notion_timeout,
        };

        let notion_api_base = lookup("NOTION_API_BASE")
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.notion_api_base);

        Ok(Self {
            bind_addr: lookup("WORKOUT_RELAY_BIND").unwrap_or(defaults.bind_addr),
            port,
            notion_api_base,
            notion_version: lookup("NOTION_VERSION").unwrap_or(defaults.notion_version),
            notion_timeout,
            param_prefix: lookup("WORKOUT_RELAY_PARAM_PREFIX").unwrap_or_default(),
        })
    }

    /// `host:port` string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.notion_api_base, "https://api.notion.com");
        assert_eq!(config.notion_version, "2022-06-28");
        assert_eq!(config.notion_timeout, Duration::from_secs(30));
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert!(config.param_prefix.is_empty());
    }

    #[test]
    fn overrides_are_applied() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("WORKOUT_RELAY_PORT", "9090"),
            ("WORKOUT_RELAY_BIND", "127.0.0.1"),
            ("NOTION_API_BASE", "http://127.0.0.1:4000/"),
            ("NOTION_TIMEOUT_SECS", "5"),
            ("WORKOUT_RELAY_PARAM_PREFIX", "PROD_"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9090");
        assert_eq!(config.notion_api_base, "http://127.0.0.1:4000");
        assert_eq!(config.notion_timeout, Duration::from_secs(5));
        assert_eq!(config.param_prefix, "PROD_");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = RelayConfig::from_lookup(lookup_from(&[("WORKOUT_RELAY_PORT", "eighty")]))
            .unwrap_err();
        let ConfigError::InvalidValue { key, message } = err;
        assert_eq!(key, "WORKOUT_RELAY_PORT");
        assert!(message.contains("eighty"));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        assert!(
            RelayConfig::from_lookup(lookup_from(&[("NOTION_TIMEOUT_SECS", "-1")])).is_err()
        );
    }
}
