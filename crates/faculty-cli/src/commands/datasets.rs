// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty datasets` commands.

use crate::commands::Context;
use crate::output::{emit, Listing};
use anyhow::Result;
use faculty_app::{datasets, resolve_project, Platform};
use std::path::Path;

/// Lists dataset paths under a prefix, one per line.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or listing fails.
pub fn ls(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    prefix: &str,
    show_hidden: bool,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let mut listing = Listing::new(&["Path"], "");
    for path in datasets::ls(platform, project_id, prefix, show_hidden)? {
        listing.push(vec![path]);
    }
    emit(&ctx.formatter.format_listing(&listing, false));
    Ok(())
}

/// Copies from the datasets to the local filesystem.
///
/// # Errors
///
/// Returns `DatasetError::NoSuchObject` naming the project as given when the
/// dataset path does not exist.
pub fn get(
    platform: &dyn Platform,
    project: &str,
    project_path: &str,
    local_path: &str,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    datasets::get(platform, project_id, project_path, local_path)
        .map_err(|err| datasets::name_missing_object(err, project))?;
    Ok(())
}

/// Copies from the local filesystem to the datasets.
///
/// # Errors
///
/// Returns an error if the local path cannot be read or a dataset directory
/// already exists.
pub fn put(
    platform: &dyn Platform,
    project: &str,
    local_path: &str,
    project_path: &str,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    datasets::put(platform, project_id, Path::new(local_path), project_path)?;
    Ok(())
}

/// Moves a file or directory within the datasets.
///
/// # Errors
///
/// Returns an error if the source does not exist.
pub fn mv(platform: &dyn Platform, project: &str, source: &str, destination: &str) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    datasets::mv(platform, project_id, source, destination)?;
    Ok(())
}

/// Copies a file, or a directory with `recursive`, within the datasets.
///
/// # Errors
///
/// Returns an error if the source does not exist or is a directory and
/// `recursive` is not set.
pub fn cp(
    platform: &dyn Platform,
    project: &str,
    source: &str,
    destination: &str,
    recursive: bool,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    datasets::cp(platform, project_id, source, destination, recursive)?;
    Ok(())
}

/// Removes a file, or a directory with `recursive`, from the datasets.
///
/// # Errors
///
/// Returns an error if the path does not exist or is a directory and
/// `recursive` is not set.
pub fn rm(platform: &dyn Platform, project: &str, path: &str, recursive: bool) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    datasets::rm(platform, project_id, path, recursive)?;
    Ok(())
}
