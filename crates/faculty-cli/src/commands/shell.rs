// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty shell` command.

use anyhow::Result;
use faculty_app::ssh::shell_command;
use faculty_app::{resolve_project, resolve_server, run_streaming, KeyFile, Platform};

/// Opens an interactive SSH session on a running server.
///
/// # Returns
///
/// The exit code of `ssh`.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved or `ssh` cannot be
/// started.
pub fn execute(
    platform: &dyn Platform,
    project: &str,
    server: &str,
    ssh_opts: &[String],
) -> Result<i32> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), true)?;
    let details = platform.ssh_details(project_id, server_id)?;

    let key = KeyFile::write(&details.key)?;
    let argv = shell_command(&details, key.path(), ssh_opts);
    Ok(run_streaming(&argv)?)
}
