// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty environment` commands.

use crate::commands::Context;
use crate::output::{emit, Listing};
use anyhow::Result;
use faculty_app::{
    agent_url, execution_summary, latest_execution, resolve_environment, resolve_project,
    resolve_server, stream_step_logs, Platform,
};

/// Lists the environments of a project.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or the environments
/// cannot be fetched.
pub fn list(platform: &dyn Platform, ctx: &Context, project: &str, verbose: bool) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let environments = platform.list_environments(project_id)?;

    let mut listing = Listing::new(&["Environment Name", "ID"], "No environments.");
    for environment in &environments {
        listing.push(vec![environment.name.clone(), environment.id.to_string()]);
    }
    emit(&ctx.formatter.format_listing(&listing, verbose));
    Ok(())
}

/// Applies an environment to a running server.
///
/// # Errors
///
/// Returns an error if any name cannot be resolved or the platform rejects
/// the request.
pub fn apply(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    server: &str,
    environment: &str,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), true)?;
    let environment_id = resolve_environment(platform, project_id, environment)?;

    platform.apply_environment(server_id, environment_id)?;
    emit(&ctx.formatter.format_message(&format!(
        "Applying environment {environment} to server {server} for project {project}"
    )));
    Ok(())
}

/// Prints the status of the latest environment execution on a server.
///
/// # Errors
///
/// Returns an error if the server runs no agent or no environment has been
/// applied to it yet.
pub fn status(platform: &dyn Platform, ctx: &Context, project: &str, server: &str) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), true)?;
    let server = platform.get_server(project_id, server_id)?;

    let agent = platform.server_agent(&agent_url(&server)?);
    let execution = latest_execution(agent.as_ref())?;
    emit(&ctx.formatter.format_message(&execution_summary(&execution).join("\n")));
    Ok(())
}

/// Prints the output of the latest environment execution on a server.
///
/// `step` selects one step, counting from zero across all environments.
///
/// # Errors
///
/// Returns an error if the server runs no agent, no environment has been
/// applied yet, or `step` is out of range.
pub fn logs(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    server: &str,
    step: Option<usize>,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), true)?;
    let server = platform.get_server(project_id, server_id)?;

    let agent = platform.server_agent(&agent_url(&server)?);
    let execution = latest_execution(agent.as_ref())?;
    stream_step_logs(agent.as_ref(), &execution, step, &mut |line: &str| {
        emit(&ctx.formatter.format_message(line));
    })?;
    Ok(())
}
