// Rust guideline compliant 2026-10-16

//! Credentials and profile configuration.
//!
//! Credentials live in an INI file with one section per profile, shared with
//! the platform's other client libraries:
//!
//! ```ini
//! [default]
//! domain = services.cloud.my.faculty.ai
//! client_id = ...
//! client_secret = ...
//! ```
//!
//! An optional `protocol` key overrides `https`. Environment variables
//! override the values read from the file.

use crate::{Error, Result};
use ini::{EscapePolicy, Ini, Properties, WriteOption};
use std::path::{Path, PathBuf};

/// Domain used when neither the file nor the environment sets one.
pub const DEFAULT_DOMAIN: &str = "services.cloud.my.faculty.ai";

/// Protocol used when neither the file nor the environment sets one.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Profile name used when `FACULTY_PROFILE` is unset.
pub const DEFAULT_PROFILE: &str = "default";

const DOMAIN_KEY: &str = "domain";
const PROTOCOL_KEY: &str = "protocol";
const CLIENT_ID_KEY: &str = "client_id";
const CLIENT_SECRET_KEY: &str = "client_secret";

/// Connection settings and client credentials for one platform deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Platform domain, e.g. `services.cloud.my.faculty.ai`.
    pub domain: String,

    /// URL scheme for service requests.
    pub protocol: String,

    /// OAuth client ID.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

impl Profile {
    /// Creates a profile for the default protocol.
    #[must_use]
    pub fn new(domain: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            domain: domain.to_string(),
            protocol: default_protocol(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Returns the base URL of a platform service.
    ///
    /// # Arguments
    ///
    /// * `service` - Service name, e.g. `casebook`
    ///
    /// # Returns
    ///
    /// A URL of the form `{protocol}://{service}.{domain}`.
    #[must_use]
    pub fn service_url(&self, service: &str) -> String {
        format!("{}://{}.{}", self.protocol, service, self.domain)
    }
}

// Partially specified profile, as read from one source.
#[derive(Debug, Clone, Default)]
struct PartialProfile {
    domain: Option<String>,
    protocol: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl PartialProfile {
    fn from_section(section: &Properties) -> Self {
        let value = |key: &str| {
            section
                .get(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };
        Self {
            domain: value(DOMAIN_KEY),
            protocol: value(PROTOCOL_KEY),
            client_id: value(CLIENT_ID_KEY),
            client_secret: value(CLIENT_SECRET_KEY),
        }
    }

    fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            domain: var("FACULTY_DOMAIN"),
            protocol: var("FACULTY_PROTOCOL"),
            client_id: var("FACULTY_CLIENT_ID"),
            client_secret: var("FACULTY_CLIENT_SECRET"),
        }
    }

    fn merge(self, overrides: PartialProfile) -> Self {
        Self {
            domain: overrides.domain.or(self.domain),
            protocol: overrides.protocol.or(self.protocol),
            client_id: overrides.client_id.or(self.client_id),
            client_secret: overrides.client_secret.or(self.client_secret),
        }
    }

    fn complete(self, profile_name: &str) -> Result<Profile> {
        let missing = |field: &str| {
            Error::Credentials(format!(
                "{field} is not set for profile '{profile_name}'. Run 'faculty login' first."
            ))
        };
        Ok(Profile {
            domain: self.domain.unwrap_or_else(default_domain),
            protocol: self.protocol.unwrap_or_else(default_protocol),
            client_id: self.client_id.ok_or_else(|| missing("client_id"))?,
            client_secret: self.client_secret.ok_or_else(|| missing("client_secret"))?,
        })
    }
}

// Values are taken verbatim: no quote stripping beyond the INI reader's and
// no backslash escapes, so secrets round-trip with other readers.
fn read_credentials(path: &Path) -> Result<Ini> {
    let content = std::fs::read_to_string(path)?;
    Ok(Ini::load_from_str_noescape(&content)?)
}

/// Returns the path of the credentials file.
///
/// Resolution order:
/// 1. `FACULTY_CREDENTIALS_PATH`
/// 2. `$XDG_CONFIG_HOME/faculty/credentials`
/// 3. `~/.config/faculty/credentials`
///
/// # Errors
///
/// Returns `Error::Credentials` if no home directory can be determined.
pub fn credentials_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FACULTY_CREDENTIALS_PATH") {
        return Ok(PathBuf::from(path));
    }
    let config_home = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .ok_or_else(|| Error::Credentials("cannot determine home directory".to_string()))?
            .join(".config"),
    };
    Ok(config_home.join("faculty").join("credentials"))
}

/// Returns the name of the active profile.
#[must_use]
pub fn profile_name() -> String {
    std::env::var("FACULTY_PROFILE")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

/// Resolves the active profile from the credentials file and environment.
///
/// # Arguments
///
/// * `path` - Credentials file to read; a missing file is not an error
///
/// # Returns
///
/// The profile named by `FACULTY_PROFILE`, with environment overrides applied.
///
/// # Errors
///
/// Returns an error if:
/// - The credentials file exists but is readable by other users
/// - The credentials file is not valid INI
/// - No client ID or secret is available from either source
pub fn resolve_profile(path: &Path) -> Result<Profile> {
    let name = profile_name();
    let mut partial = PartialProfile::default();

    if path.exists() {
        check_permissions(path)?;
        let credentials = read_credentials(path)?;
        if let Some(section) = credentials.section(Some(name.as_str())) {
            partial = PartialProfile::from_section(section);
        }
    }

    partial.merge(PartialProfile::from_env()).complete(&name)
}

/// Writes a profile to the credentials file, keeping any other profiles.
///
/// The section is written as `key = value` lines without quoting. The
/// protocol is only written when it differs from the default. Parent
/// directories are created as needed and the file is made private to the
/// current user.
///
/// # Errors
///
/// Returns an error if the existing file cannot be parsed or the new file
/// cannot be written.
pub fn save_profile(path: &Path, name: &str, profile: &Profile) -> Result<()> {
    let mut credentials = if path.exists() {
        read_credentials(path)?
    } else {
        Ini::new()
    };

    credentials.delete(Some(name));
    let mut section = credentials.with_section(Some(name));
    section
        .set(DOMAIN_KEY, profile.domain.as_str())
        .set(CLIENT_ID_KEY, profile.client_id.as_str())
        .set(CLIENT_SECRET_KEY, profile.client_secret.as_str());
    if profile.protocol != DEFAULT_PROTOCOL {
        section.set(PROTOCOL_KEY, profile.protocol.as_str());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let options = WriteOption {
        escape_policy: EscapePolicy::Nothing,
        kv_separator: " = ",
        ..WriteOption::default()
    };
    credentials.write_to_file_opt(path, options)?;
    restrict_permissions(path)?;
    Ok(())
}

/// Fails if the credentials file is accessible to group or other users.
///
/// # Errors
///
/// Returns `Error::InsecurePermissions` when any group or other permission
/// bit is set.
#[cfg(unix)]
pub fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(Error::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

/// Fails if the credentials file is accessible to other users.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub fn check_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
