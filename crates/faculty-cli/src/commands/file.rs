// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty file` commands.

use crate::commands::Context;
use crate::output::{emit, Listing};
use anyhow::Result;
use faculty_app::ssh::{expand_home, rsync_command, scp_download, scp_upload};
use faculty_app::{
    list_directory, resolve_project, resolve_server, run_streaming, KeyFile, Platform,
    SyncDirection,
};
use faculty_core::SshDetails;

/// Direction of a single-file copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Local file to the server.
    Put,
    /// Server file to the local machine.
    Get,
}

fn server_details(
    platform: &dyn Platform,
    project: &str,
    server: Option<&str>,
) -> Result<SshDetails> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, server, true)?;
    Ok(platform.ssh_details(project_id, server_id)?)
}

/// Copies one file with `scp`.
///
/// # Returns
///
/// The exit code of `scp`.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved or `scp` cannot be
/// started.
pub fn copy(
    platform: &dyn Platform,
    project: &str,
    transfer: Transfer,
    local: &str,
    remote: &str,
    server: Option<&str>,
) -> Result<i32> {
    let details = server_details(platform, project, server)?;
    let key = KeyFile::write(&details.key)?;
    let local = expand_home(local);

    let argv = match transfer {
        Transfer::Put => scp_upload(&details, key.path(), &local, remote),
        Transfer::Get => scp_download(&details, key.path(), remote, &local),
    };
    Ok(run_streaming(&argv)?)
}

/// Synchronizes files with `rsync -a` over SSH.
///
/// # Returns
///
/// The exit code of `rsync`.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved or `rsync` cannot be
/// started.
pub fn sync(
    platform: &dyn Platform,
    project: &str,
    direction: SyncDirection,
    local: &str,
    remote: &str,
    server: Option<&str>,
    rsync_opts: &[String],
) -> Result<i32> {
    let details = server_details(platform, project, server)?;
    let key = KeyFile::write(&details.key)?;
    let argv = rsync_command(&details, key.path(), direction, local, remote, rsync_opts);
    Ok(run_streaming(&argv)?)
}

/// Lists a directory of the project workspace.
///
/// # Errors
///
/// Returns an error if the path is outside the workspace or does not exist.
pub fn ls(platform: &dyn Platform, ctx: &Context, project: &str, path: &str) -> Result<()> {
    // Reject paths outside the workspace before any lookup.
    faculty_app::workspace_prefix(path)?;
    let project_id = resolve_project(platform, project)?;

    let mut listing = Listing::new(&["Path"], "");
    for entry in list_directory(platform, project_id, path)? {
        listing.push(vec![entry]);
    }
    emit(&ctx.formatter.format_listing(&listing, false));
    Ok(())
}
