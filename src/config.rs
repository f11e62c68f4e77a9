use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::news::PLACEHOLDER_NEWS_API_KEY;

/// Main configuration structure for the finance backend
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub news: NewsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    /// host:port to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "empathic-finance".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub country: String,
    pub category: String,
    pub timeout_seconds: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_NEWS_API_KEY.to_string(),
            base_url: "https://newsapi.org/v2/top-headlines".to_string(),
            country: "in".to_string(),
            category: "business".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl NewsConfig {
    pub fn has_live_key(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != PLACEHOLDER_NEWS_API_KEY
    }
}

impl Config {
    /// Load configuration from file with environment variable overrides
    /// ALWAYS returns a valid config - never fails
    pub fn load() -> Self {
        for path in ["../.env", ".env"] {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                break;
            }
        }

        let config_path = env::var("EF_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
        let mut config = Self::from_file(Path::new(&config_path));

        config.apply_env_overrides(|key| env::var(key).ok());

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    fn from_file(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("Config file not found at {} - using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_yaml(&contents).unwrap_or_else(|e| {
                tracing::error!(
                    "Failed to parse config file {}: {} - using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }),
            Err(e) => {
                tracing::error!(
                    "Failed to read config file {}: {} - using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        let config = serde_yaml::from_str::<Config>(contents)?;
        tracing::info!("Loaded configuration from YAML");
        Ok(config)
    }

    /// Apply environment variable overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(name) = lookup("EF_SERVER_NAME") {
            self.server.name = name;
        }
        if let Some(bind) = lookup("EF_HTTP_BIND") {
            self.server.bind = bind;
        }

        // News overrides
        if let Some(key) = lookup("NEWS_API_KEY") {
            self.news.api_key = key;
        }
        if let Some(url) = lookup("NEWS_API_URL") {
            self.news.base_url = url;
        }
        if let Some(country) = lookup("NEWS_COUNTRY") {
            self.news.country = country;
        }
        if let Some(category) = lookup("NEWS_CATEGORY") {
            self.news.category = category;
        }
        if let Some(timeout) = lookup("NEWS_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(secs) => self.news.timeout_seconds = secs,
                Err(_) => tracing::warn!("Ignoring invalid NEWS_TIMEOUT_SECONDS '{}'", timeout),
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.bind_addr()?;
        if self.news.timeout_seconds == 0 {
            return Err("News timeout_seconds cannot be 0".into());
        }
        if self.news.has_live_key() && !self.news.base_url.starts_with("http") {
            return Err(format!("News base_url '{}' is not an http(s) URL", self.news.base_url).into());
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.server.bind.parse()
    }
}
