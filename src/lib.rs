//! `nsot-cli` - A command-line client for the Network Source of Truth
//!
//! This library maps sub-command options (`changes`, `interfaces`,
//! `networks`) onto request payloads, invokes one verb of an API client
//! and renders the results as tables or delimited text.

pub mod callbacks;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::{Context as _, Result};
use cli::Args;
use client::HttpClient;
use config::Config;
use system::System;

/// Main entry point for the nsot library
///
/// Options are validated before the HTTP client is built, so usage
/// failures are reported even when no API URL is configured.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be loaded or is invalid
/// - Option validation fails
/// - No API URL is configured
/// - The API call fails
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let config = Config::resolve(system, args.config.as_deref(), args.url.clone())
        .context("Failed to load configuration")?;

    let invocation = operations::plan(&args.command, &config, system)?;
    let client = HttpClient::from_config(&config)?;
    let output = operations::execute(&invocation, &client)?;

    // Output to stdout (not using logging)
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
