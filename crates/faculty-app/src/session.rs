// Rust guideline compliant 2026-10-16

//! Credentials discovery and platform connection.

use crate::error::Result;
use crate::http::HttpPlatform;
use faculty_core::config::{self, credentials_path, profile_name, resolve_profile};
use faculty_core::Profile;
use std::path::{Path, PathBuf};

/// The active profile and where it was loaded from.
#[derive(Debug, Clone)]
pub struct Session {
    credentials_path: PathBuf,
    profile_name: String,
    profile: Profile,
}

impl Session {
    /// Loads the active profile from the default credentials file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file is insecure or unreadable, or
    /// no client credentials are configured.
    pub fn load() -> Result<Self> {
        Self::load_from(&credentials_path()?)
    }

    /// Loads the active profile from a specific credentials file.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file is insecure or unreadable, or
    /// no client credentials are configured.
    pub fn load_from(path: &Path) -> Result<Self> {
        let profile = resolve_profile(path)?;
        let name = profile_name();
        tracing::debug!(profile = %name, domain = %profile.domain, "loaded credentials");
        Ok(Self {
            credentials_path: path.to_path_buf(),
            profile_name: name,
            profile,
        })
    }

    /// Returns the credentials file path.
    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Returns the active profile name.
    #[must_use]
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// Returns the active profile.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Opens an HTTP connection to the platform.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Transport` if the HTTP client cannot be built.
    pub fn connect(&self) -> Result<HttpPlatform> {
        HttpPlatform::new(self.profile.clone())
    }
}

/// Checks client credentials against the platform, then stores them under
/// the active profile name.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the platform rejects the credentials
/// and an IO or TOML error if the credentials file cannot be updated.
pub fn login(path: &Path, profile: &Profile) -> Result<()> {
    HttpPlatform::new(profile.clone())?.access_token()?;
    let name = profile_name();
    config::save_profile(path, &name, profile)?;
    tracing::info!(profile = %name, path = %path.display(), "saved credentials");
    Ok(())
}
