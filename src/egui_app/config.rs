use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Client configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, config file and environment, in that order
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self { app: AppConfig::load()? })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> String {
        self.api_url(&self.app.login_path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.app.request_timeout
    }
}
