//! Configuration file handling
//!
//! Every field is optional; a missing file argument means all defaults.
//! Command line flags override values read from the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advisor::Thresholds;
use crate::http_server::HttpServerConfig;
use crate::rules::DEFAULT_RULES_FILE;

use super::args::SourceArgs;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Association rules CSV (default: "associationRules.csv")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Initial "Minimum Probability" slider position
    #[serde(default = "default_min_success")]
    pub default_min_success: u32,

    /// Initial "Minimum Frequency" slider position
    #[serde(default = "default_min_frequency")]
    pub default_min_frequency: f64,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_FILE)
}

fn default_min_success() -> u32 {
    Thresholds::DEFAULT_MIN_SUCCESS
}

fn default_min_frequency() -> f64 {
    Thresholds::DEFAULT_MIN_FREQUENCY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            http: HttpServerConfig::default(),
            default_min_success: default_min_success(),
            default_min_frequency: default_min_frequency(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file named by `--config` (if any) and apply `--data`
    pub fn resolve(source: &SourceArgs) -> CliResult<Self> {
        let mut config = match &source.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(data) = &source.data {
            config.data_path = data.clone();
        }

        Ok(config)
    }

    /// Slider defaults must themselves be valid thresholds
    fn validate(&self) -> CliResult<()> {
        self.default_thresholds()?;

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        Ok(())
    }

    /// Initial slider positions as validated thresholds
    pub fn default_thresholds(&self) -> CliResult<Thresholds> {
        Thresholds::new(self.default_min_success, self.default_min_frequency).map_err(|e| {
            CliError::config_error(format!("Invalid default thresholds: {}", e))
        })
    }

    /// Apply `--host` and `--port` overrides
    pub fn with_listener(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }
}
