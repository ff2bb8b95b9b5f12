//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::NsotError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Load and parse the YAML dotfile
pub fn load_config(system: &dyn System, path: &str) -> Result<Config> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(NsotError::configuration(format!(
            "Configuration file not found: {path}\n\
            Create ~/.nsotrc.yaml or specify a different path with --config"
        ))
        .into());
    }

    let content = system
        .read_to_string(path_obj)
        .map_err(|e| NsotError::configuration(format!("Failed to read {path}: {e}")))?;

    // An empty dotfile is an empty configuration
    if content.trim().is_empty() {
        debug!("Configuration file {path} is empty");
        return Ok(Config::default());
    }

    let raw: serde_json::Value = serde_yaml::from_str(&content).map_err(|e| {
        NsotError::configuration(format!(
            "Failed to parse YAML configuration in file: {path}\n{e}"
        ))
    })?;

    crate::config::schema::validate_against_schema(&raw)
        .map_err(|e| NsotError::configuration(format!("{path}: {e}")))?;

    let config: Config = serde_json::from_value(raw)
        .context("Failed to convert configuration after schema validation")?;

    config.validate()?;

    debug!("Loaded configuration from {path}");
    Ok(config)
}
