// Rust guideline compliant 2026-10-16

//! Error types for the Faculty core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of core errors.
///
/// Callers use the category to pick an exit code or error envelope without
/// matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed command-line argument text.
    Parse,
    /// A name or selection matched nothing.
    NotFound,
    /// A name or selection matched more than one resource.
    Ambiguous,
    /// Missing or unusable credentials.
    Credentials,
    /// Filesystem or serialization failure.
    Io,
}

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A `name=value` parameter chunk could not be split into a pair.
    #[error("Invalid parameter value: {0}")]
    InvalidParameterValue(String),

    /// A run identifier was not of the form `N` or `N.M`.
    #[error("Invalid run identifier: {0}")]
    InvalidRunIdentifier(String),

    /// No resource of the given kind has the requested name.
    #[error("no {kind} of name \"{name}\"{scope}")]
    NameNotFound {
        /// Kind description, e.g. `running server`.
        kind: String,
        /// The name that was looked up.
        name: String,
        /// Trailing scope phrase, e.g. ` in this project`.
        scope: String,
    },

    /// More than one resource of the given kind has the requested name.
    #[error("more than one {kind} of name \"{name}\", please select by {noun} ID instead")]
    AmbiguousName {
        /// Kind description, e.g. `running server`.
        kind: String,
        /// Bare resource noun, e.g. `server`.
        noun: String,
        /// The name that was looked up.
        name: String,
    },

    /// No name was given and there was nothing to pick from.
    #[error("No {kind}{scope}.")]
    NoneAvailable {
        /// Kind description.
        kind: String,
        /// Trailing scope phrase.
        scope: String,
    },

    /// No name was given and more than one candidate was left.
    #[error("{count} {kind}s{scope}, please select one by name or {noun} ID")]
    SelectionRequired {
        /// Kind description.
        kind: String,
        /// Bare resource noun.
        noun: String,
        /// Trailing scope phrase.
        scope: String,
        /// Number of candidates.
        count: usize,
    },

    /// Credentials could not be resolved.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// The credentials file is readable by other users.
    #[error(
        "Permissions for {path} are too open.\n\
         Your credentials file must not be accessible to other users on this computer.\n\
         Run 'chmod 0600 {path}' to fix this.",
        path = .0.display()
    )]
    InsecurePermissions(PathBuf),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The credentials file is not valid INI.
    #[error("Credentials file error: {0}")]
    Ini(#[from] ini::ParseError),
}

impl Error {
    /// Returns the category of the error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidParameterValue(_) | Error::InvalidRunIdentifier(_) => {
                ErrorCategory::Parse
            }
            Error::NameNotFound { .. } | Error::NoneAvailable { .. } => ErrorCategory::NotFound,
            Error::AmbiguousName { .. } | Error::SelectionRequired { .. } => {
                ErrorCategory::Ambiguous
            }
            Error::Credentials(_) | Error::InsecurePermissions(_) => ErrorCategory::Credentials,
            Error::Io(_) | Error::Json(_) | Error::Ini(_) => ErrorCategory::Io,
        }
    }
}
