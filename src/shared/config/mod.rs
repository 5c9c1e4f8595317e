//! Application configuration module
//!
//! Provides configuration types for the login client.
//!
//! Values are layered, lowest priority first:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`<config dir>/onboarding/client.toml`)
//! 3. environment variables (`CLIENT_API_URL`, `CLIENT_LOGIN_PATH`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Default path of the login endpoint
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server URL
    pub server_url: String,
    /// Path of the login endpoint, relative to `server_url`
    pub login_path: String,
    /// Transport timeout for a single request; `None` leaves it to reqwest
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.server_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.server_url,
                url.scheme()
            )));
        }
        if self.login_path.is_empty() {
            return Err(ConfigError::MissingValue("login_path"));
        }
        Ok(())
    }

    /// Default location of the client config file
    pub fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("onboarding");
            path.push("client.toml");
            path
        })
    }

    /// Load defaults, then the default config file (if present), then env vars.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(path) = Self::default_file_path().filter(|path| path.exists()) {
            builder = builder.merge_file(&path)?;
        }
        builder.merge_env().build()
    }
}

/// On-disk representation; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server_url: Option<String>,
    login_path: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    login_path: Option<String>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the login endpoint path
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Apply values from a TOML config file
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        self.merge_toml(&contents)
    }

    /// Apply values from TOML text
    pub fn merge_toml(mut self, contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Some(url) = file.server_url {
            self.server_url = Some(url);
        }
        if let Some(path) = file.login_path {
            self.login_path = Some(path);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Apply `CLIENT_API_URL` and `CLIENT_LOGIN_PATH` when set
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var("CLIENT_API_URL") {
            self.server_url = Some(url);
        }
        if let Ok(path) = std::env::var("CLIENT_LOGIN_PATH") {
            self.login_path = Some(path);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            login_path: self.login_path.unwrap_or(defaults.login_path),
            request_timeout: self.request_timeout.or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("cannot read config file: {0}")]
    Io(String),
    #[error("cannot parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.login_path, "/auth/login");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("https://onboarding.example.com/")
            .build()
            .unwrap();
        assert_eq!(config.server_url, "https://onboarding.example.com");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = AppConfig::builder().server_url("not a url").build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_unsupported_scheme_is_rejected() {
        let result = AppConfig::builder().server_url("ftp://example.com").build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(msg)) if msg.contains("ftp"));
    }

    #[test]
    fn test_empty_login_path_is_rejected() {
        let result = AppConfig::builder().login_path("").build();
        assert_matches!(result, Err(ConfigError::MissingValue("login_path")));
    }

    #[test]
    fn test_merge_toml() {
        let config = AppConfig::builder()
            .merge_toml(
                r#"
                server_url = "https://auth.example.com"
                login_path = "/api/login"
                request_timeout_secs = 15
                "#,
            )
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.server_url, "https://auth.example.com");
        assert_eq!(config.login_path, "/api/login");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_merge_toml_rejects_unknown_keys() {
        let result = AppConfig::builder().merge_toml("colour = \"blue\"");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_merge_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = \"http://10.0.0.5:9000\"").unwrap();

        let config = AppConfig::builder()
            .merge_file(file.path())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.server_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_merge_missing_file() {
        let result = AppConfig::builder().merge_file(Path::new("/nonexistent/client.toml"));
        assert_matches!(result, Err(ConfigError::Io(_)));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        std::env::set_var("CLIENT_API_URL", "http://env.example.com");
        std::env::remove_var("CLIENT_LOGIN_PATH");

        let config = AppConfig::builder()
            .merge_toml("server_url = \"http://file.example.com\"")
            .unwrap()
            .merge_env()
            .build()
            .unwrap();

        std::env::remove_var("CLIENT_API_URL");
        assert_eq!(config.server_url, "http://env.example.com");
    }
}
