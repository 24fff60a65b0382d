// src/config.rs
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tracing::warn;

use crate::error::CheckRedirectsResult;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// User-Agent of this client. The agent the remote tracer emulates is
    /// part of the request body instead.
    #[serde(default = "default_client_user_agent")]
    pub client_user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            request_timeout_seconds: default_request_timeout(),
            client_user_agent: default_client_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LookupConfig {
    #[serde(default = "default_user_agent")]
    pub default_user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_user_agent: default_user_agent(),
        }
    }
}

pub const DEFAULT_API_URL: &str = "https://check-redirects.infra.ptco.rocks/api/search/";
pub const DEFAULT_USER_AGENT: &str = "chrome";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_request_timeout() -> u64 {
    6
}
fn default_client_user_agent() -> String {
    format!("check-redirects/{}", env!("CARGO_PKG_VERSION"))
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Config {
    pub fn load(config_path: Option<String>) -> CheckRedirectsResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => std::env::var("CHECK_REDIRECTS_CONFIG")
                .unwrap_or_else(|_| "config/config.yaml".to_owned()),
        };

        let mut config = if Path::new(&config_path).exists() {
            Config::from_file(&config_path)?
        } else {
            Config::default()
        };

        config.update_from_env();

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileError(e.to_string()))?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        if config.api.request_timeout_seconds == 0 {
            return Err(ConfigError::ParseError(
                "api.request_timeout_seconds must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    fn update_from_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("CHECK_REDIRECTS_API_URL") {
            self.api.url = val;
        }
        if let Some(val) = lookup("CHECK_REDIRECTS_TIMEOUT_SECONDS") {
            match val.parse::<u64>() {
                Ok(seconds) if seconds > 0 => self.api.request_timeout_seconds = seconds,
                _ => warn!(value = %val, "Ignoring invalid CHECK_REDIRECTS_TIMEOUT_SECONDS"),
            }
        }
        if let Some(val) = lookup("CHECK_REDIRECTS_CLIENT_USER_AGENT") {
            self.api.client_user_agent = val;
        }
        if let Some(val) = lookup("CHECK_REDIRECTS_USER_AGENT") {
            self.lookup.default_user_agent = val;
        }
    }
}

pub fn get_version() -> String {
    let branch = option_env!("VERGEN_GIT_BRANCH").unwrap_or("main");
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let time = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    format!("{} {} {}", branch, sha, time)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
