// Rust guideline compliant 2026-10-16

//! Filesystem-like operations on a project's datasets.
//!
//! Dataset paths are absolute, starting with `/`. Directories are listed with
//! a trailing `/`.

use crate::error::{AppError, DatasetError, Result};
use crate::platform::Platform;
use std::fs::{self, File};
use std::io;
use std::path::{Path, MAIN_SEPARATOR};
use uuid::Uuid;

/// Lists dataset paths starting with `prefix`, across all pages.
///
/// Paths with any component starting with `.` are left out unless
/// `show_hidden` is set.
///
/// # Errors
///
/// Returns an error if a page cannot be fetched.
pub fn ls(
    platform: &dyn Platform,
    project_id: Uuid,
    prefix: &str,
    show_hidden: bool,
) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    let mut page_token: Option<String> = None;
    loop {
        let page = platform.list_objects(project_id, prefix, page_token.as_deref())?;
        paths.extend(page.objects.into_iter().map(|object| object.path));
        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    if !show_hidden {
        paths.retain(|path| !is_hidden(path));
    }
    Ok(paths)
}

fn is_hidden(path: &str) -> bool {
    path.split('/').any(|component| component.starts_with('.'))
}

fn directory_prefix(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

fn is_directory(platform: &dyn Platform, project_id: Uuid, path: &str) -> Result<bool> {
    if path.ends_with('/') {
        return Ok(true);
    }
    Ok(!ls(platform, project_id, &directory_prefix(path), true)?.is_empty())
}

fn parent_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/",
        Some(index) => &trimmed[..index],
    }
}

fn local_error(path: &Path, source: io::Error) -> DatasetError {
    DatasetError::Local {
        path: path.display().to_string(),
        source,
    }
}

fn create_local_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| local_error(path, source))?;
    Ok(())
}

/// Copies a dataset file or directory to the local filesystem.
///
/// Directories are copied recursively, creating local directories as needed.
///
/// # Errors
///
/// Returns `DatasetError::PathNotFound` if nothing exists at `project_path`,
/// `DatasetError::TargetIsDirectoryPath` when a file would be written to a
/// path ending in a separator, or `DatasetError::Local` for local failures.
pub fn get(
    platform: &dyn Platform,
    project_id: Uuid,
    project_path: &str,
    local_path: &str,
) -> Result<()> {
    if is_directory(platform, project_id, project_path)? {
        return get_directory(platform, project_id, project_path, Path::new(local_path));
    }
    if local_path.ends_with('/') || local_path.ends_with(MAIN_SEPARATOR) {
        return Err(DatasetError::TargetIsDirectoryPath(local_path.to_string()).into());
    }
    get_file(platform, project_id, project_path, Path::new(local_path))
}

/// Rewords a missing path reported by [`get`] to name the project as the
/// user gave it.
#[must_use]
pub fn name_missing_object(err: AppError, project: &str) -> AppError {
    match err {
        AppError::Dataset(DatasetError::PathNotFound(path)) => DatasetError::NoSuchObject {
            path,
            project: project.to_string(),
        }
        .into(),
        other => other,
    }
}

fn get_directory(
    platform: &dyn Platform,
    project_id: Uuid,
    project_path: &str,
    local_path: &Path,
) -> Result<()> {
    let directory = directory_prefix(project_path);
    let paths = ls(platform, project_id, &directory, true)?;
    if paths.is_empty() {
        return Err(DatasetError::PathNotFound(project_path.to_string()).into());
    }

    create_local_directory(local_path)?;
    for path in &paths {
        let Some(relative) = path.strip_prefix(&directory) else {
            continue;
        };
        if relative.is_empty() {
            continue;
        }
        let target = local_path.join(relative.trim_end_matches('/'));
        if relative.ends_with('/') {
            create_local_directory(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_local_directory(parent)?;
            }
            get_file(platform, project_id, path, &target)?;
        }
    }
    Ok(())
}

fn get_file(
    platform: &dyn Platform,
    project_id: Uuid,
    project_path: &str,
    local_path: &Path,
) -> Result<()> {
    tracing::debug!(project_path, local_path = %local_path.display(), "downloading");
    let mut file = File::create(local_path).map_err(|source| local_error(local_path, source))?;
    let result = platform.download_object(project_id, project_path, &mut file);
    if result.is_err() {
        drop(file);
        let _ = fs::remove_file(local_path);
    }
    result
}

/// Copies a local file or directory into the datasets.
///
/// Missing parent directories of `project_path` are created first.
///
/// # Errors
///
/// Returns `DatasetError::PathAlreadyExists` if a directory being created
/// already exists, or `DatasetError::Local` if the local path cannot be read.
pub fn put(
    platform: &dyn Platform,
    project_id: Uuid,
    local_path: &Path,
    project_path: &str,
) -> Result<()> {
    let parent = parent_path(project_path);
    if parent != "/" {
        platform.create_directory(project_id, parent, true)?;
    }
    put_tree(platform, project_id, local_path, project_path)
}

fn put_tree(
    platform: &dyn Platform,
    project_id: Uuid,
    local_path: &Path,
    project_path: &str,
) -> Result<()> {
    let metadata = fs::metadata(local_path).map_err(|source| local_error(local_path, source))?;
    if !metadata.is_dir() {
        tracing::debug!(project_path, local_path = %local_path.display(), "uploading");
        let mut file = File::open(local_path).map_err(|source| local_error(local_path, source))?;
        return platform.upload_object(project_id, project_path, &mut file);
    }

    platform.create_directory(project_id, project_path, false)?;
    let mut entries = fs::read_dir(local_path)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|source| local_error(local_path, source))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    let directory = directory_prefix(project_path);
    for entry in entries {
        let child = format!("{directory}{}", entry.file_name().to_string_lossy());
        put_tree(platform, project_id, &entry.path(), &child)?;
    }
    Ok(())
}

/// Copies a dataset file, or a directory when `recursive` is set.
///
/// # Errors
///
/// Returns `DatasetError::PathNotFound` if the source does not exist, or
/// `DatasetError::SourceIsADirectory` for a directory without `recursive`.
pub fn cp(
    platform: &dyn Platform,
    project_id: Uuid,
    source: &str,
    destination: &str,
    recursive: bool,
) -> Result<()> {
    platform.copy_object(project_id, source, destination, recursive)
}

/// Moves a dataset file or directory.
///
/// # Errors
///
/// Returns `DatasetError::PathNotFound` if the source does not exist.
pub fn mv(
    platform: &dyn Platform,
    project_id: Uuid,
    source: &str,
    destination: &str,
) -> Result<()> {
    platform.copy_object(project_id, source, destination, true)?;
    platform.delete_object(project_id, source, true)
}

/// Removes a dataset file, or a directory when `recursive` is set.
///
/// # Errors
///
/// Returns `DatasetError::PathNotFound` if the path does not exist, or
/// `DatasetError::TargetIsADirectory` for a directory without `recursive`.
pub fn rm(platform: &dyn Platform, project_id: Uuid, path: &str, recursive: bool) -> Result<()> {
    platform.delete_object(project_id, path, recursive)
}
