//! Configuration loading for Qiyas.
//! Reads qiyas.toml from the current directory or the path in QIYAS_CONFIG,
//! then applies QIYAS_* environment overrides on top.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_bind()       -> String { "127.0.0.1:3000".to_string() }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), static_dir: default_static_dir() }
    }
}

/// The external answering service the relay forwards to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Pass the backend's own HTTP status through instead of always
    /// answering 200 when the outbound call succeeds.
    #[serde(default)]
    pub propagate_status: bool,
}

fn default_backend_url() -> String { "http://localhost:5000/ask".to_string() }

impl Default for BackendConfig {
    fn default() -> Self {
        Self { url: default_backend_url(), propagate_status: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "qiyas=debug,tower_http=info,info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    /// Load configuration from qiyas.toml.
    /// Checks QIYAS_CONFIG env var first, then current directory. A missing
    /// file is not an error; every field has a default.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case outside development.
        let _ = dotenvy::dotenv();

        let path = std::env::var("QIYAS_CONFIG")
            .unwrap_or_else(|_| "qiyas.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!("No config file at {path}; using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply QIYAS_BACKEND_URL / QIYAS_BIND from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("QIYAS_BACKEND_URL").filter(|v| !v.is_empty()) {
            self.backend.url = url;
        }
        if let Some(bind) = lookup("QIYAS_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.backend.url).map_err(|e| {
            ConfigError::Invalid(format!("backend.url {:?}: {e}", self.backend.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "backend.url must be http or https, got {:?}",
                url.scheme()
            )));
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::Invalid(format!("server.bind {:?}: {e}", self.server.bind))
        })
    }
}
