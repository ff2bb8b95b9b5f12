//! Enumerated values accepted by the server

use crate::error::TransformError;
use ipnetwork::IpNetwork;

/// Change events recorded by the server
pub const CHANGE_EVENTS: &[&str] = &["Create", "Update", "Delete"];

/// Resource types a change can refer to
pub const CHANGE_RESOURCES: &[&str] = &["Site", "Attribute", "Device", "Network", "Interface"];

/// Map a change event to the server's spelling
///
/// # Errors
///
/// Returns an error if the value is not a known event.
#[inline]
pub fn transform_event(value: &str) -> Result<String, TransformError> {
    match_choice(value, CHANGE_EVENTS)
}

/// Map a resource name to the server's spelling
///
/// # Errors
///
/// Returns an error if the value is not a known resource name.
#[inline]
pub fn transform_resource_name(value: &str) -> Result<String, TransformError> {
    match_choice(value, CHANGE_RESOURCES)
}

/// Validate a network in CIDR notation, returning it normalized
///
/// # Errors
///
/// Returns an error if the value is not an IPv4 or IPv6 CIDR.
#[inline]
pub fn transform_cidr(value: &str) -> Result<String, TransformError> {
    let trimmed = value.trim();
    if !trimmed.contains('/') {
        return Err(TransformError::invalid_format(value, "CIDR notation (e.g. 10.0.0.0/8)"));
    }
    trimmed
        .parse::<IpNetwork>()
        .map(|network| network.to_string())
        .map_err(|_| TransformError::invalid_format(value, "CIDR notation (e.g. 10.0.0.0/8)"))
}

fn match_choice(value: &str, choices: &[&str]) -> Result<String, TransformError> {
    let wanted = value.trim();
    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(wanted))
        .map(|choice| (*choice).to_owned())
        .ok_or_else(|| TransformError::InvalidChoice {
            value: value.to_owned(),
            choices: choices.iter().map(|c| (*c).to_owned()).collect(),
        })
}
