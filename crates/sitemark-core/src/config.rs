//! Site configuration management.

use std::{collections::BTreeMap, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for sitemark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Meta tag settings.
    #[serde(default)]
    pub meta: MetaConfig,

    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,
}

/// Meta tag configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Default tags seeded into every meta generator, keyed by tag name.
    ///
    /// A `BTreeMap` so the seeded order is deterministic.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Whether the rendered sitemap should be cached by the serving layer.
    #[serde(default)]
    pub cache: bool,

    /// Cache lifetime in minutes.
    #[serde(default = "default_cache_minutes")]
    pub cache_minutes: u64,
}

impl SitemapConfig {
    /// Cache lifetime as a `Duration`.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_minutes * 60)
    }
}

/// robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// User-agent the default rule block applies to.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Disallowed paths. An empty string disallows nothing (allows all).
    #[serde(default = "default_disallow")]
    pub disallow: Vec<String>,

    /// Explicitly allowed paths.
    #[serde(default)]
    pub allow: Vec<String>,
}

// Default value functions
fn default_cache_minutes() -> u64 {
    60
}

fn default_user_agent() -> String {
    "*".to_string()
}

fn default_disallow() -> Vec<String> {
    vec![String::new()]
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            cache: false,
            cache_minutes: default_cache_minutes(),
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            disallow: default_disallow(),
            allow: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
