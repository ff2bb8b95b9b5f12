//! Site scope resolution

use crate::error::TransformError;

/// Flag name reported when no site can be resolved
pub const SITE_ID_OPTION: &str = "-s\" / \"--site-id";

/// Resolve the site a command operates under
///
/// An explicit value wins over the configured default site. When neither is
/// available and the command needs a site scope, the option is reported
/// missing.
///
/// # Errors
///
/// Returns an error if:
/// - The value is not a positive integer
/// - No site is available and `required` is set
#[inline]
pub fn process_site_id(
    value: Option<&str>,
    default_site: Option<i64>,
    required: bool,
) -> Result<Option<i64>, TransformError> {
    let site_id = match value {
        Some(raw) => Some(parse_site_id(raw)?),
        None => default_site,
    };

    if site_id.is_none() && required {
        return Err(TransformError::missing_option(SITE_ID_OPTION));
    }

    Ok(site_id)
}

fn parse_site_id(raw: &str) -> Result<i64, TransformError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TransformError::invalid_format(raw, "a positive integer site ID")),
    }
}
