//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for nsot operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NsotError {
    /// Configuration Error - missing or invalid client configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Usage Error - missing or conflicting options, detected before any request
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Transform Error - an option value could not be normalized
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Server Error - propagated from the API client as-is
    #[error("Server error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Server {
        status: Option<u16>,
        message: String,
    },
}

/// Failures raised by option callbacks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformError {
    /// A value does not have the expected shape (e.g. `key=value`)
    #[error("Invalid format '{value}': expected {expected}")]
    InvalidFormat { value: String, expected: String },

    /// An option required by this command was not supplied
    #[error("Missing option \"{option}\"")]
    MissingRequiredOption { option: String },

    /// A bulk file line could not be parsed
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A value is not among the accepted choices
    #[error("Invalid value '{value}'. Must be one of: {}", .choices.join(", "))]
    InvalidChoice { value: String, choices: Vec<String> },
}

impl NsotError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Usage { .. } | Self::Transform(TransformError::MissingRequiredOption { .. }) => 2,
            Self::Transform(_) => 3,
            Self::Server { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a server error
    #[inline]
    pub fn server<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}

impl TransformError {
    /// Create an invalid format error
    #[inline]
    pub fn invalid_format<V: Into<String>, E: Into<String>>(value: V, expected: E) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a missing option error
    #[inline]
    pub fn missing_option<S: Into<String>>(option: S) -> Self {
        Self::MissingRequiredOption {
            option: option.into(),
        }
    }

    /// Create a bulk file parse error
    #[inline]
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
