//! Configuration management for the Agricultural Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Static assets and generated charts
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory served under `url_prefix`
    pub static_dir: PathBuf,

    /// Sub-directory of `static_dir` that receives simulation charts
    pub visuals_subdir: String,

    /// URL path the static directory is mounted at
    pub url_prefix: String,
}

impl AssetsConfig {
    /// Filesystem directory charts are written to
    pub fn visuals_dir(&self) -> PathBuf {
        self.static_dir.join(self.visuals_subdir.trim_matches('/'))
    }

    /// Public URL of a chart file
    pub fn visual_url(&self, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url_prefix.trim_end_matches('/'),
            self.visuals_subdir.trim_matches('/'),
            file_name
        )
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("assets.static_dir", "static")?
            .set_default("assets.visuals_subdir", "visuals")?
            .set_default("assets.url_prefix", "/static")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            visuals_subdir: "visuals".to_string(),
            url_prefix: "/static".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}
