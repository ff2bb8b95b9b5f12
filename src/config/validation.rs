//! Configuration validation logic

use crate::config::Config;
use crate::error::NsotError;
use anyhow::Result;
use regex::Regex;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - The API URL is not an http(s) URL
/// - The default site or timeout is not positive
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(url) = config.url.as_ref() {
        validate_url(url)?;
    }

    if let Some(site) = config.default_site
        && site < 1
    {
        return Err(
            NsotError::configuration(format!("default_site must be positive, got {site}")).into(),
        );
    }

    if config.timeout_secs == Some(0) {
        return Err(NsotError::configuration("timeout_secs must be at least 1").into());
    }

    Ok(())
}

/// Validate an API base URL
///
/// # Errors
///
/// Returns an error if:
/// - The URL does not start with `http://` or `https://` followed by a host
#[inline]
pub fn validate_url(url: &str) -> Result<()> {
    let regex = Regex::new(r"^https?://[^/\s]+(/\S*)?$")?;
    if regex.is_match(url) {
        return Ok(());
    }

    Err(NsotError::configuration(format!(
        "Invalid API URL: '{url}'\n\
        Expected an http(s) URL such as https://nsot.example.com/api"
    ))
    .into())
}
