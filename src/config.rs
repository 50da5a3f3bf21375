//! Server configuration
//!
//! Values come from three layers: built-in defaults, an optional TOML file
//! and command-line flags (each flag also readable from the environment).
//! Later layers win.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::error::CatalogError;
use crate::infrastructure::catalog_store::Catalog;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cloud-catalog")]
#[command(about = "Serve a read-only cloud service catalog over HTTP")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "CATALOG_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "CATALOG_PORT")]
    pub port: Option<u16>,

    /// JSON catalog to serve instead of the built-in one
    #[arg(long = "catalog", env = "CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Allowed CORS origins, comma-separated; `*` allows any, `https://*.example.com` any subdomain
    #[arg(long, env = "CATALOG_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

/// Contents of the optional TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub catalog_file: Option<PathBuf>,
    pub cors_origins: Option<Vec<String>>,
    pub log_json: Option<bool>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog_file: Option<PathBuf>,
    pub cors_origins: Vec<String>,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_file: None,
            cors_origins: vec!["*".to_string()],
            verbose: false,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Merge defaults, the config file named by `cli.config` and the flags
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        let config = Self::merge(file, cli);
        config.validate()?;
        Ok(config)
    }

    fn merge(file: FileConfig, cli: Cli) -> Self {
        let defaults = Self::default();
        Self {
            host: cli.host.or(file.host).unwrap_or(defaults.host),
            port: cli.port.or(file.port).unwrap_or(defaults.port),
            catalog_file: cli.catalog_file.or(file.catalog_file),
            cors_origins: cli
                .cors_origins
                .or(file.cors_origins)
                .unwrap_or(defaults.cors_origins),
            verbose: cli.verbose,
            log_json: cli.log_json || file.log_json.unwrap_or(false),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "host must not be empty".to_string(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                message: "port must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the configured catalog file, or the built-in data set
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_file {
            Some(path) => Catalog::from_path(path),
            None => Catalog::embedded(),
        }
    }
}
