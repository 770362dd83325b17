// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty login` command.

use crate::terminal::{confirm, print_warning, prompt, prompt_secret};
use anyhow::Result;
use faculty_app::session;
use faculty_app::AppError;
use faculty_core::config::{credentials_path, DEFAULT_DOMAIN};
use faculty_core::Profile;
use std::path::Path;

/// Prompts for credentials and writes them, asking before replacing an
/// existing credentials file.
///
/// # Errors
///
/// Returns an error if the prompts cannot be read or the file cannot be
/// written.
pub fn execute() -> Result<()> {
    let path = credentials_path().map_err(AppError::from)?;
    if path.exists() && !confirm("Overwrite existing credentials file?")? {
        return Ok(());
    }
    prompt_credentials(&path)
}

/// Prompts until the platform accepts a set of credentials, then saves them.
///
/// # Errors
///
/// Returns an error if the prompts cannot be read or the file cannot be
/// written.
pub fn prompt_credentials(path: &Path) -> Result<()> {
    loop {
        let domain = prompt("Domain", Some(DEFAULT_DOMAIN))?;
        let client_id = prompt("Client ID", None)?;
        let client_secret = prompt_secret("Client secret")?;
        let profile = Profile::new(&domain, &client_id, &client_secret);

        match session::login(path, &profile) {
            Ok(()) => return Ok(()),
            Err(AppError::BadRequest(_) | AppError::NotFound(_) | AppError::Http { .. }) => {
                print_warning("Invalid credentials. Please try again.");
            }
            Err(err) => return Err(err.into()),
        }
    }
}
