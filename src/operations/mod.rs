//! Operations module
//!
//! Turns a parsed sub-command into exactly one client call. Planning
//! validates options and assembles the request without touching the
//! network; execution performs the call and renders the results.

pub mod changes;
pub mod interfaces;
pub mod networks;
pub mod payload;

use crate::cli::Command;
use crate::client::{ApiClient, Request, Verb};
use crate::config::Config;
use crate::display::{Output, render};
use crate::error::NsotError;
use crate::system::System;
use std::path::Path;
use tracing::{debug, info};

/// A fully validated client call and how to present its results
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub verb: Verb,
    pub request: Request,
    pub output: Output,
}

/// Validate `command` and assemble its client call
///
/// # Errors
///
/// Returns an error if:
/// - An option value cannot be transformed
/// - A required option is missing or options conflict
/// - A bulk file cannot be read or parsed
#[inline]
pub fn plan(
    command: &Command,
    config: &Config,
    system: &dyn System,
) -> Result<Invocation, NsotError> {
    let invocation = match *command {
        Command::Changes(ref cmd) => changes::plan(cmd, config)?,
        Command::Interfaces(ref cmd) => interfaces::plan(cmd, config, system)?,
        Command::Networks(ref cmd) => networks::plan(cmd, config, system)?,
    };

    debug!(
        "Planned {:?} on {} with payload {:?}",
        invocation.verb, invocation.request.resource, invocation.request.payload
    );
    Ok(invocation)
}

/// Perform the planned call and render its results
///
/// # Errors
///
/// Returns an error if the client call fails.
#[inline]
pub fn execute(invocation: &Invocation, client: &dyn ApiClient) -> Result<String, NsotError> {
    let results = client.call(invocation.verb, &invocation.request)?;
    info!(
        "{:?} on {} returned {} record(s)",
        invocation.verb,
        invocation.request.resource,
        results.len()
    );
    Ok(render(&results, &invocation.output))
}

/// Plan and execute `command` against `client`
///
/// # Errors
///
/// Returns an error if planning or the client call fails.
#[inline]
pub fn dispatch(
    command: &Command,
    config: &Config,
    system: &dyn System,
    client: &dyn ApiClient,
) -> Result<String, NsotError> {
    let invocation = plan(command, config, system)?;
    execute(&invocation, client)
}

/// Read a bulk file through the system abstraction
pub(crate) fn read_bulk_file(system: &dyn System, path: &Path) -> Result<String, NsotError> {
    system.read_to_string(path).map_err(|err| {
        NsotError::usage(format!(
            "Invalid value for \"-b\" / \"--bulk-add\": could not open file: {}: {err}",
            path.display()
        ))
    })
}

/// Shorthand for the usage error raised when an option is missing
pub(crate) fn missing_option(option: &str) -> NsotError {
    NsotError::usage(format!("Missing option \"{option}\""))
}
