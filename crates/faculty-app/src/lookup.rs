// Rust guideline compliant 2026-10-16

//! Resolution of user-supplied resource names against the platform.
//!
//! Identifier literals are returned as-is without contacting the platform;
//! names are matched against a fresh listing.

use crate::error::Result;
use crate::platform::Platform;
use faculty_core::resolve::{self, match_name, parse_identifier, select_only};
use faculty_core::{Kind, ServerStatus};
use uuid::Uuid;

/// Resolves a project name or ID among the projects the user can access.
///
/// # Errors
///
/// Returns `Error::NameNotFound` or `Error::AmbiguousName` (wrapped in
/// `AppError::Core`) when the name does not pick out exactly one project.
pub fn resolve_project(platform: &dyn Platform, query: &str) -> Result<Uuid> {
    if let Some(id) = parse_identifier(query) {
        return Ok(id);
    }
    let user_id = platform.authenticated_user_id()?;
    let projects = platform.list_projects(user_id)?;
    let kind = Kind::new("project").scoped("found");
    Ok(resolve::resolve(query, &projects, |p| &p.name, &kind)?)
}

/// Resolves a server in a project.
///
/// With `ensure_running`, only running servers are considered. Without a
/// query the project must contain exactly one eligible server.
///
/// # Arguments
///
/// * `platform` - Platform to list servers from
/// * `project_id` - Project the server belongs to
/// * `query` - Server name or ID, if the user gave one
/// * `ensure_running` - Whether to consider only running servers
///
/// # Errors
///
/// Returns `Error::NameNotFound`/`Error::AmbiguousName` for a name that does
/// not pick out one server, `Error::NoneAvailable` when no query was given
/// and the project has no eligible server, and `Error::SelectionRequired`
/// when it has several.
pub fn resolve_server(
    platform: &dyn Platform,
    project_id: Uuid,
    query: Option<&str>,
    ensure_running: bool,
) -> Result<Uuid> {
    if let Some(id) = query.and_then(parse_identifier) {
        return Ok(id);
    }

    let qualifier = if ensure_running {
        ServerStatus::Running.as_str()
    } else {
        "available"
    };
    let eligible = |status: ServerStatus| !ensure_running || status == ServerStatus::Running;

    match query {
        Some(name) => {
            let servers = platform.list_servers(project_id, Some(name))?;
            let kind = Kind::new("server")
                .qualified(qualifier)
                .scoped("in this project");
            let server = match_name(name, &servers, |s| &s.name, |s| eligible(s.status), &kind)?;
            Ok(server.id)
        }
        None => {
            let servers = platform.list_servers(project_id, None)?;
            let kind = Kind::new("server").qualified(qualifier).scoped("in project");
            let server = select_only(&servers, |s| eligible(s.status), &kind)?;
            Ok(server.id)
        }
    }
}

/// Resolves a job name or ID in a project.
///
/// # Errors
///
/// Returns `Error::NameNotFound` or `Error::AmbiguousName` when the name
/// does not pick out exactly one job.
pub fn resolve_job(platform: &dyn Platform, project_id: Uuid, query: &str) -> Result<Uuid> {
    if let Some(id) = parse_identifier(query) {
        return Ok(id);
    }
    let jobs = platform.list_jobs(project_id)?;
    let kind = Kind::new("job").scoped("in this project");
    Ok(resolve::resolve(query, &jobs, |j| j.name(), &kind)?)
}

/// Resolves an environment name or ID in a project.
///
/// # Errors
///
/// Returns `Error::NameNotFound` or `Error::AmbiguousName` when the name
/// does not pick out exactly one environment.
pub fn resolve_environment(
    platform: &dyn Platform,
    project_id: Uuid,
    query: &str,
) -> Result<Uuid> {
    if let Some(id) = parse_identifier(query) {
        return Ok(id);
    }
    let environments = platform.list_environments(project_id)?;
    let kind = Kind::new("environment");
    Ok(resolve::resolve(query, &environments, |e| &e.name, &kind)?)
}
