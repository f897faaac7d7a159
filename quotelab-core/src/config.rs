//! Process configuration: the provider credential.
//!
//! The credential is loaded once at startup and injected into the providers;
//! nothing in the core reads the environment after construction.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted when no config file is given.
pub const API_KEY_ENV: &str = "FINNHUB_API_KEY";

/// Provider API credential.
///
/// `Debug` is redacted so the key cannot leak into logs or error chains; the
/// raw value is only reachable through [`ApiKey::expose`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for building request URLs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Unparseable {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no API key: set FINNHUB_API_KEY or pass a config file")]
    MissingApiKey,
}

/// Application configuration, TOML-backed.
///
/// ```toml
/// api_key = "your-finnhub-key"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api_key: ApiKey,
}

impl AppConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Unparseable {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Read the credential from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Self {
                api_key: ApiKey::new(key),
            }),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Config file when given, environment otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        let config = AppConfig { api_key: key };
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn parses_toml_config() {
        let config: AppConfig = toml::from_str(r#"api_key = "abc123""#).unwrap();
        assert_eq!(config.api_key.expose(), "abc123");
    }

    #[test]
    fn load_reads_a_file() {
        let path = std::env::temp_dir().join(format!(
            "quotelab_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "api_key = \"from-file\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.api_key.expose(), "from-file");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/quotelab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn load_reports_bad_toml() {
        let path = std::env::temp_dir().join(format!(
            "quotelab_bad_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "api_key = [1, 2]\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Unparseable { .. }));

        let _ = std::fs::remove_file(&path);
    }
}
