// Rust guideline compliant 2026-10-16

//! Command implementations for the Faculty CLI.

pub mod datasets;
pub mod environment;
pub mod file;
pub mod job;
pub mod login;
pub mod project;
pub mod server;
pub mod shell;

use crate::OutputFormatter;
use anyhow::Result;
use faculty_app::{AppError, HttpPlatform, Session};
use faculty_core::Error as CoreError;

/// Settings shared by every command.
pub struct Context {
    /// Renders command output.
    pub formatter: Box<dyn OutputFormatter>,
    /// Whether headings may be colored.
    pub use_color: bool,
}

/// Connects to the platform with the active profile.
///
/// On an interactive terminal, missing credentials start the login prompt
/// first.
///
/// # Errors
///
/// Returns an error if no usable credentials are available.
pub fn connect() -> Result<HttpPlatform> {
    let session = match Session::load() {
        Err(AppError::Core(CoreError::Credentials(_))) if crate::terminal::is_interactive() => {
            eprintln!(
                "It looks like this is the first time you've used the Faculty CLI on this \
                 computer, so you must enter your Faculty credentials. They'll be saved so you \
                 don't have to enter them again."
            );
            let path = faculty_core::config::credentials_path().map_err(AppError::from)?;
            login::prompt_credentials(&path)?;
            Session::load_from(&path)?
        }
        other => other?,
    };
    Ok(session.connect()?)
}
