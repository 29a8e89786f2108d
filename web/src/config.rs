use std::sync::OnceLock;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api/NasaImages/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

static SEARCH_CONFIG: OnceLock<SearchConfig> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
    #[error("{key} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { key: &'static str, value: String },
    #[error("search configuration already initialized")]
    AlreadyInitialized,
}

/// Settings for the upstream image search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_url: String,
    pub exclude_earth: bool,
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            exclude_earth: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SearchConfig {
    pub const API_URL_KEY: &'static str = "SPACE_IMAGES_API_URL";
    pub const EXCLUDE_EARTH_KEY: &'static str = "SPACE_IMAGES_EXCLUDE_EARTH";
    pub const TIMEOUT_KEY: &'static str = "SPACE_IMAGES_TIMEOUT_SECS";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(Self::API_URL_KEY) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty {
                    key: Self::API_URL_KEY,
                });
            }
            config.api_url = url.trim_end_matches('?').to_string();
        }

        if let Some(value) = lookup(Self::EXCLUDE_EARTH_KEY) {
            config.exclude_earth =
                parse_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                    key: Self::EXCLUDE_EARTH_KEY,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(Self::TIMEOUT_KEY) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    key: Self::TIMEOUT_KEY,
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Reads the environment once at startup.
pub fn init_search_config() -> Result<&'static SearchConfig, ConfigError> {
    let config = SearchConfig::from_env()?;
    SEARCH_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(search_config())
}

/// The active config, or the defaults if startup never loaded one.
pub fn search_config() -> &'static SearchConfig {
    SEARCH_CONFIG.get_or_init(SearchConfig::default)
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
    fn defaults_when_unset() {
        let config = SearchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.exclude_earth);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = SearchConfig::from_lookup(lookup(&[
            ("SPACE_IMAGES_API_URL", " https://images.example/api/search? "),
            ("SPACE_IMAGES_EXCLUDE_EARTH", "No"),
            ("SPACE_IMAGES_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://images.example/api/search");
        assert!(!config.exclude_earth);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_empty_url() {
        let err = SearchConfig::from_lookup(lookup(&[("SPACE_IMAGES_API_URL", "  ")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Empty {
                key: "SPACE_IMAGES_API_URL"
            }
        );
    }

    #[test]
    fn rejects_bad_bool() {
        let err = SearchConfig::from_lookup(lookup(&[("SPACE_IMAGES_EXCLUDE_EARTH", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        for value in ["0", "-4", "ten"] {
            let err = SearchConfig::from_lookup(lookup(&[("SPACE_IMAGES_TIMEOUT_SECS", value)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{value}");
        }
    }

    #[test]
    fn bool_spellings() {
        for value in ["true", "TRUE", "1", "yes", " Yes "] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["false", "0", "no", "NO"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
        assert_eq!(parse_bool(""), None);
    }
}
