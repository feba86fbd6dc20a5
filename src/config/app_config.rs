use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const GRAPHQL_URL_ENV: &str = "SCHEDULES_GRAPHQL_URL";
pub const AUTH_TOKEN_ENV: &str = "SCHEDULES_AUTH_TOKEN";

/// Longest shifts window accepted from the config file.
pub const MAX_SHIFT_WINDOW_DAYS: i64 = 366;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL endpoint of the on-call backend
    pub graphql_url: String,

    /// Sent as a bearer token when set
    pub auth_token: Option<String>,

    /// Rows requested per page by list pages
    pub page_size: u32,

    /// How far ahead the shifts page looks, in days
    pub shift_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:3030/api/graphql".to_string(),
            auth_token: None,
            page_size: 15,
            shift_window_days: 14,
        }
    }
}

impl AppConfig {
    /// Load the default config file and apply env overrides. An unusable
    /// file falls back to defaults; env overrides apply either way.
    pub fn load() -> Self {
        let file = Self::config_path().and_then(|path| Self::load_from(&path));
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    pub fn resolve(file: Result<Self>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = file.unwrap_or_else(|e| {
            warn!("Using default configuration: {:#}", e);
            Self::default()
        });
        config.apply_env_overrides(lookup);
        config
    }

    /// Reads `path`, writing a default config there first if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config = Self::parse(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overrides from the environment. Values that would fail `validate`
    /// are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(GRAPHQL_URL_ENV).filter(|v| !v.trim().is_empty()) {
            if is_http_url(&url) {
                self.graphql_url = url;
            } else {
                warn!("Ignoring {}: not an http(s) URL: {:?}", GRAPHQL_URL_ENV, url);
            }
        }
        if let Some(token) = lookup(AUTH_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.auth_token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_http_url(&self.graphql_url) {
            anyhow::bail!("graphql_url must be an http(s) URL, got {:?}", self.graphql_url);
        }
        if self.page_size == 0 {
            anyhow::bail!("page_size must be greater than zero");
        }
        if self.shift_window_days <= 0 || self.shift_window_days > MAX_SHIFT_WINDOW_DAYS {
            anyhow::bail!(
                "shift_window_days must be between 1 and {}, got {}",
                MAX_SHIFT_WINDOW_DAYS,
                self.shift_window_days
            );
        }
        Ok(())
    }

    /// `<config dir>/oncall-schedules/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("oncall-schedules").join("config.toml"))
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
