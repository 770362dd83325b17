// Rust guideline compliant 2026-10-16

//! SSH, scp and rsync invocations against platform servers.

use crate::error::{AppError, Result};
use faculty_core::SshDetails;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Options passed to every `ssh` and `scp` invocation.
pub const SSH_OPTIONS: [&str; 6] = [
    "-o",
    "IdentitiesOnly=yes",
    "-o",
    "StrictHostKeyChecking=no",
    "-o",
    "BatchMode=yes",
];

/// Hint printed when a connection is refused with `Permission denied`.
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission was denied when attempting to connect \
to your Faculty server. A bug in earlier versions of OpenSSH (including the version distributed \
with macOS 10.10) may be the cause - please try updating your operating system or SSH version \
and try again.";

/// A server's private key written to a private temporary directory.
///
/// The directory and key are removed when the value is dropped.
#[derive(Debug)]
pub struct KeyFile {
    dir: TempDir,
    path: PathBuf,
}

impl KeyFile {
    /// Writes `key` to a new file readable only by the current user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be written.
    pub fn write(key: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("key.pem");
        fs::write(&path, key)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o400))?;
        }

        Ok(Self { dir, path })
    }

    /// Returns the path of the key file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory holding the key file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Quotes a path for interpretation by the remote POSIX shell.
#[must_use]
pub fn quote(value: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c);
    if !value.is_empty() && value.chars().all(safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r#"'"'"'"#))
}

fn remote(details: &SshDetails, path: &str) -> String {
    format!("{}@{}:{}", details.username, details.hostname, quote(path))
}

fn options() -> impl Iterator<Item = String> {
    SSH_OPTIONS.iter().map(|s| (*s).to_string())
}

/// Builds the argv of an interactive `ssh` session, with extra options
/// appended after the destination.
#[must_use]
pub fn shell_command(details: &SshDetails, key: &Path, extra: &[String]) -> Vec<String> {
    let mut argv = vec!["ssh".to_string()];
    argv.extend(options());
    argv.extend([
        "-p".to_string(),
        details.port.to_string(),
        "-i".to_string(),
        key.display().to_string(),
        format!("{}@{}", details.username, details.hostname),
    ]);
    argv.extend(extra.iter().cloned());
    argv
}

fn scp_command(details: &SshDetails, key: &Path, from: String, to: String) -> Vec<String> {
    let mut argv = vec!["scp".to_string()];
    argv.extend(options());
    argv.extend([
        "-i".to_string(),
        key.display().to_string(),
        "-P".to_string(),
        details.port.to_string(),
        from,
        to,
    ]);
    argv
}

/// Builds the argv copying a local file to the server.
#[must_use]
pub fn scp_upload(details: &SshDetails, key: &Path, local: &str, remote_path: &str) -> Vec<String> {
    scp_command(details, key, local.to_string(), remote(details, remote_path))
}

/// Builds the argv copying a file from the server to a local path.
#[must_use]
pub fn scp_download(
    details: &SshDetails,
    key: &Path,
    remote_path: &str,
    local: &str,
) -> Vec<String> {
    scp_command(details, key, remote(details, remote_path), local.to_string())
}

/// Direction of an rsync transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Local files to the server.
    Up,
    /// Server files to the local machine.
    Down,
}

/// Builds an `rsync -a` argv tunnelled over SSH.
///
/// Extra options are appended after the source and destination.
#[must_use]
pub fn rsync_command(
    details: &SshDetails,
    key: &Path,
    direction: SyncDirection,
    local: &str,
    remote_path: &str,
    extra: &[String],
) -> Vec<String> {
    let shell = format!(
        "ssh {} -p {} -i {}",
        SSH_OPTIONS.join(" "),
        details.port,
        key.display()
    );
    let (from, to) = match direction {
        SyncDirection::Up => (local.to_string(), remote(details, remote_path)),
        SyncDirection::Down => (remote(details, remote_path), local.to_string()),
    };

    let mut argv = vec!["rsync".to_string(), "-a".to_string(), "-e".to_string(), shell, from, to];
    argv.extend(extra.iter().cloned());
    argv
}

/// Expands a leading `~` in a local path to the home directory.
#[must_use]
pub fn expand_home(path: &str) -> String {
    match (path.strip_prefix('~'), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{rest}", Path::new(&home).display())
        }
        _ => path.to_string(),
    }
}

fn needs_permission_hint(line: &[u8]) -> bool {
    let text = String::from_utf8_lossy(line);
    text.contains("Permission denied") && !text.contains("rsync: send_files failed to open")
}

/// Runs a command, relaying its standard error and adding a hint after
/// permission errors.
///
/// # Returns
///
/// The exit code of the process, or 1 if it was terminated by a signal.
///
/// # Errors
///
/// Returns `AppError::Process` if the program cannot be started.
pub fn run_streaming(argv: &[String]) -> Result<i32> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| AppError::InvalidInput("empty command".to_string()))?;
    tracing::debug!(program = %program, ?args, "running command");

    let mut child = Command::new(program)
        .args(args)
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| AppError::Process {
            program: program.clone(),
            source,
        })?;

    if let Some(stderr) = child.stderr.take() {
        let mut reader = BufReader::new(stderr);
        let mut out = std::io::stderr();
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            out.write_all(&line)?;
            if needs_permission_hint(&line) {
                writeln!(out, "{PERMISSION_DENIED_MESSAGE}")?;
            }
            line.clear();
        }
    }

    let status = child.wait()?;
    tracing::debug!(program = %program, ?status, "command finished");
    Ok(status.code().unwrap_or(1))
}
