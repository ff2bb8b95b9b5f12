//! Configuration management module
//!
//! Handles the optional YAML dotfile, JSON schema validation, and merging
//! command-line overrides into the client settings.

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the dotfile looked up in the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".nsotrc.yaml";

/// Request timeout used when the dotfile does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the inventory API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Site used when a command is not given `-s/--site-id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_site: Option<i64>,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Resolve the configuration for this invocation
    ///
    /// An explicit path must exist. Without one, the dotfile in the home
    /// directory is used when present and an empty configuration otherwise.
    /// A `url` override always wins over the file.
    pub fn resolve(
        system: &dyn System,
        explicit_path: Option<&str>,
        url_override: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from_file(system, path)?,
            None => match default_config_path(system) {
                Some(path) if system.exists(&path) => {
                    Self::load_from_file(system, &path.to_string_lossy())?
                }
                _ => Self::default(),
            },
        };

        if let Some(url) = url_override {
            validation::validate_url(&url)?;
            config.url = Some(url);
        }

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Called by the loader after schema validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL, default site or timeout is invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }

    /// Timeout to use for API requests
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Location of the dotfile in the user's home directory
#[must_use]
pub fn default_config_path(system: &dyn System) -> Option<PathBuf> {
    system.home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}
