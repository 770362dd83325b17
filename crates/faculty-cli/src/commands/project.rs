// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty project` commands.

use crate::commands::Context;
use crate::output::{emit, Listing};
use anyhow::Result;
use faculty_app::Platform;
use faculty_core::Project;

/// Builds the listing of projects: name and ID.
#[must_use]
pub fn project_listing(projects: &[Project]) -> Listing {
    let mut listing = Listing::new(&["Project Name", "ID"], "No projects.");
    for project in projects {
        listing.push(vec![project.name.clone(), project.id.to_string()]);
    }
    listing
}

/// Lists the projects the user can access.
///
/// # Errors
///
/// Returns an error if the projects cannot be fetched.
pub fn list(platform: &dyn Platform, ctx: &Context, verbose: bool) -> Result<()> {
    let user_id = platform.authenticated_user_id()?;
    let projects = platform.list_projects(user_id)?;
    emit(&ctx.formatter.format_listing(&project_listing(&projects), verbose));
    Ok(())
}

/// Creates a project owned by the user.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the platform rejects the name.
pub fn new(platform: &dyn Platform, ctx: &Context, name: &str) -> Result<()> {
    let user_id = platform.authenticated_user_id()?;
    let project = platform.create_project(user_id, name)?;
    tracing::info!(project_id = %project.id, "created project");
    emit(&ctx.formatter.format_message(&format!(
        "Created project {} with ID {}",
        project.name, project.id
    )));
    Ok(())
}
