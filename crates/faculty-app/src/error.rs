// Rust guideline compliant 2026-10-16

//! Error handling for Faculty application services.

use faculty_core::{Error as CoreError, ErrorCategory};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Exit code for usage errors, unresolvable names and rejected requests.
pub const EXIT_USAGE: i32 = 64;

/// Exit code for missing input files, credentials and workspace paths.
pub const EXIT_NO_INPUT: i32 = 66;

/// Exit code for unexpected responses from the platform.
pub const EXIT_SOFTWARE: i32 = 70;

/// Exit code when no server is available to act on.
pub const EXIT_CONFIG: i32 = 78;

/// Stable error codes for JSON error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A command-line argument could not be parsed.
    ParseError,
    /// A name or selection matched nothing.
    NotFound,
    /// A name or selection matched several resources.
    AmbiguousName,
    /// The request included invalid inputs.
    InvalidInput,
    /// Credentials are missing or unusable.
    CredentialsError,
    /// The platform rejected the request.
    BadRequest,
    /// The platform returned an unexpected response.
    HttpError,
    /// A subprocess could not be run.
    ProcessError,
    /// IO failure.
    IoError,
    /// A dataset path was missing, already present or of the wrong kind.
    DatasetError,
    /// A server does not run the service a command needs.
    ServiceUnavailable,
    /// A server failed or went away while starting.
    ServerFailed,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Failures of dataset operations, named after the path involved.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The target path is already taken.
    #[error("{0} already exists")]
    PathAlreadyExists(String),

    /// The path does not exist.
    #[error("{0} cannot be found")]
    PathNotFound(String),

    /// A directory was copied without `--recursive`.
    #[error("{0} is a directory, use --recursive to copy it")]
    SourceIsADirectory(String),

    /// A directory was removed without `--recursive`.
    #[error("{0} is a directory, use --recursive to remove it")]
    TargetIsADirectory(String),

    /// No object or directory at a path being downloaded.
    #[error("No such object {path} in project {project}")]
    NoSuchObject {
        /// Requested dataset path.
        path: String,
        /// Project name as given by the user.
        project: String,
    },

    /// A single file cannot be written to a path naming a directory.
    #[error("Target {0} cannot be a directory")]
    TargetIsDirectoryPath(String),

    /// A local file could not be read or written.
    #[error("{path}: {source}")]
    Local {
        /// Local path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("{0}")]
    InvalidInput(String),

    /// The platform rejected the request with a 400 response.
    #[error("{0}")]
    BadRequest(String),

    /// The platform has no such resource.
    #[error("{0}")]
    NotFound(String),

    /// The platform returned an unexpected status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The platform returned something the client cannot use.
    #[error("{0}")]
    UnexpectedResponse(String),

    /// A path was outside the project workspace or otherwise unusable.
    #[error("{0}")]
    Workspace(String),

    /// A server does not expose a service the command needs.
    #[error("{0}")]
    MissingService(String),

    /// A server stopped before it reached the running state.
    #[error("{0}")]
    ServerFailed(String),

    /// A dataset operation failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// An external program could not be started.
    #[error("failed to run {program}: {source}")]
    Process {
        /// Program name.
        program: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// HTTP transport error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) | AppError::Workspace(_) => ErrorCode::InvalidInput,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Http { .. } | AppError::UnexpectedResponse(_) | AppError::Transport(_) => {
                ErrorCode::HttpError
            }
            AppError::Process { .. } => ErrorCode::ProcessError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Dataset(_) => ErrorCode::DatasetError,
            AppError::MissingService(_) => ErrorCode::ServiceUnavailable,
            AppError::ServerFailed(_) => ErrorCode::ServerFailed,
            AppError::Core(core) => match core.category() {
                ErrorCategory::Parse => ErrorCode::ParseError,
                ErrorCategory::NotFound => ErrorCode::NotFound,
                ErrorCategory::Ambiguous => ErrorCode::AmbiguousName,
                ErrorCategory::Credentials => ErrorCode::CredentialsError,
                ErrorCategory::Io => ErrorCode::IoError,
            },
        }
    }

    /// Returns the process exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Core(CoreError::NoneAvailable { .. }) => EXIT_CONFIG,
            AppError::Core(CoreError::Credentials(_) | CoreError::InsecurePermissions(_))
            | AppError::Workspace(_) => EXIT_NO_INPUT,
            AppError::UnexpectedResponse(_) => EXIT_SOFTWARE,
            AppError::Core(core) if core.category() != ErrorCategory::Io => EXIT_USAGE,
            AppError::InvalidInput(_)
            | AppError::BadRequest(_)
            | AppError::NotFound(_)
            | AppError::Dataset(_) => EXIT_USAGE,
            _ => 1,
        }
    }
}
