// Rust guideline compliant 2026-10-16

//! Project workspace paths and listings.

use crate::error::{AppError, Result};
use crate::platform::Platform;
use faculty_core::WorkspaceEntry;
use uuid::Uuid;

/// Mount point of the project workspace on servers.
pub const WORKSPACE_ROOT: &str = "/project";

/// Converts an absolute workspace path into a prefix relative to the
/// workspace root, keeping a leading `/`.
///
/// # Errors
///
/// Returns `AppError::Workspace` if `path` is not `/project` or below it.
pub fn workspace_prefix(path: &str) -> Result<String> {
    let rest = path
        .strip_prefix(WORKSPACE_ROOT)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .ok_or_else(|| AppError::Workspace(format!("{path} is outside the project workspace")))?;

    let trimmed = rest.trim_matches('/');
    if trimmed.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

/// Formats a workspace entry as an absolute path, marking directories with
/// a trailing `/`.
#[must_use]
pub fn display_path(entry: &WorkspaceEntry) -> String {
    let path = entry.path().trim_end_matches('/');
    if entry.is_directory() {
        format!("{WORKSPACE_ROOT}{path}/")
    } else {
        format!("{WORKSPACE_ROOT}{path}")
    }
}

/// Lists the immediate contents of a workspace directory.
///
/// # Errors
///
/// Returns `AppError::Workspace` if `path` is outside the workspace or does
/// not exist, and `AppError::UnexpectedResponse` if the platform does not
/// return exactly one entry for `path`.
pub fn list_directory(
    platform: &dyn Platform,
    project_id: Uuid,
    path: &str,
) -> Result<Vec<String>> {
    let prefix = workspace_prefix(path)?;

    let entries = match platform.list_workspace(project_id, &prefix, 1) {
        Ok(entries) => entries,
        Err(AppError::NotFound(_)) => {
            return Err(AppError::Workspace(format!(
                "{path}: No such file or directory"
            )))
        }
        Err(err) => return Err(err),
    };

    match entries.as_slice() {
        [WorkspaceEntry::Directory { content, .. }] => {
            Ok(content.iter().map(display_path).collect())
        }
        [file @ WorkspaceEntry::File { .. }] => Ok(vec![display_path(file)]),
        _ => Err(AppError::UnexpectedResponse(
            "Zero or more than one objects returned".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_of_root() {
        assert_eq!(workspace_prefix("/project").unwrap(), "/");
        assert_eq!(workspace_prefix("/project/").unwrap(), "/");
    }

    #[test]
    fn test_prefix_of_subdirectory() {
        assert_eq!(workspace_prefix("/project/data/raw/").unwrap(), "/data/raw");
    }

    #[test]
    fn test_prefix_rejects_outside_paths() {
        for path in ["/home/user", "project/data", "/projects"] {
            let err = workspace_prefix(path).unwrap_err();
            assert_eq!(err.to_string(), format!("{path} is outside the project workspace"));
        }
    }

    #[test]
    fn test_display_path_marks_directories() {
        let dir = WorkspaceEntry::Directory {
            path: "/data/".to_string(),
            name: "data".to_string(),
            content: Vec::new(),
        };
        let file = WorkspaceEntry::File {
            path: "/notes.txt".to_string(),
            name: "notes.txt".to_string(),
            size: 3,
        };
        assert_eq!(display_path(&dir), "/project/data/");
        assert_eq!(display_path(&file), "/project/notes.txt");
    }
}
