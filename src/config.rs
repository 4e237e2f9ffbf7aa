use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::{
    error::config::ConfigError,
    util::{generation::GenerationTable, time::DEFAULT_CACHE_TTL_DAYS},
};

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://assets.pokemon.com/assets/cms2/img/pokedex/detail";
pub const DEFAULT_LANGUAGE: &str = "ko";
pub const DEFAULT_STORAGE_KEY: &str = "pokemonList";
pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub storage_key: String,
    pub cache_ttl: Duration,
    pub batch_size: usize,
    pub request_timeout: StdDuration,
    pub user_agent: String,
    pub valkey_url: Option<String>,
    pub generations: GenerationTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            cache_ttl: Duration::days(DEFAULT_CACHE_TTL_DAYS),
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout: StdDuration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            valkey_url: None,
            generations: GenerationTable::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment, falling back to defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let batch_size = match lookup("CATALOG_BATCH_SIZE") {
            Some(value) => parse_var::<usize>("CATALOG_BATCH_SIZE", &value)?,
            None => defaults.batch_size,
        };
        if batch_size == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "CATALOG_BATCH_SIZE".to_string(),
                reason: "batch size must be greater than zero".to_string(),
            });
        }

        let cache_ttl = match lookup("CATALOG_CACHE_TTL_DAYS") {
            Some(value) => parse_ttl_days(&value)?,
            None => defaults.cache_ttl,
        };

        let request_timeout = match lookup("POKEAPI_TIMEOUT_SECS") {
            Some(value) => {
                StdDuration::from_secs(parse_var::<u64>("POKEAPI_TIMEOUT_SECS", &value)?)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_base_url: lookup("POKEAPI_BASE_URL").unwrap_or(defaults.api_base_url),
            image_base_url: lookup("POKEMON_IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            language: lookup("POKEDEX_LANGUAGE").unwrap_or(defaults.language),
            storage_key: lookup("CATALOG_STORAGE_KEY").unwrap_or(defaults.storage_key),
            cache_ttl,
            batch_size,
            request_timeout,
            user_agent: lookup("POKEDEX_USER_AGENT").unwrap_or(defaults.user_agent),
            valkey_url: lookup("VALKEY_URL"),
            generations: defaults.generations,
        })
    }
}

fn parse_ttl_days(value: &str) -> Result<Duration, ConfigError> {
    let days = parse_var::<i64>("CATALOG_CACHE_TTL_DAYS", value)?;

    let invalid = |reason: &str| ConfigError::InvalidEnvValue {
        var: "CATALOG_CACHE_TTL_DAYS".to_string(),
        reason: reason.to_string(),
    };

    if days < 0 {
        return Err(invalid("cache TTL must not be negative"));
    }

    Duration::try_days(days).ok_or_else(|| invalid("cache TTL is out of range"))
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn uses_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.language, "ko");
        assert_eq!(config.storage_key, "pokemonList");
        assert_eq!(config.cache_ttl, Duration::days(7));
        assert_eq!(config.batch_size, 50);
        assert!(config.valkey_url.is_none());
        assert_eq!(config.generations.total_count(), 1025);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEAPI_BASE_URL", "http://localhost:1234"),
            ("CATALOG_BATCH_SIZE", "200"),
            ("CATALOG_CACHE_TTL_DAYS", "1"),
            ("VALKEY_URL", "redis://127.0.0.1:6379"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:1234");
        assert_eq!(config.batch_size, 200);
        assert_eq!(config.cache_ttl, Duration::days(1));
        assert_eq!(config.valkey_url.as_deref(), Some("redis://127.0.0.1:6379"));
    }

    #[test]
    fn rejects_invalid_numbers() {
        let result = Config::from_lookup(lookup_from(&[("CATALOG_BATCH_SIZE", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "CATALOG_BATCH_SIZE"
        ));

        let result = Config::from_lookup(lookup_from(&[("CATALOG_BATCH_SIZE", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_ttl() {
        for value in ["9999999999999999", "-1"] {
            let result = Config::from_lookup(lookup_from(&[("CATALOG_CACHE_TTL_DAYS", value)]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidEnvValue { ref var, .. })
                        if var == "CATALOG_CACHE_TTL_DAYS"
                ),
                "{value} should be rejected"
            );
        }

        let config = Config::from_lookup(lookup_from(&[("CATALOG_CACHE_TTL_DAYS", "0")])).unwrap();
        assert_eq!(config.cache_ttl, Duration::zero());
    }
}
