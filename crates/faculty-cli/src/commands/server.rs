// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty server` commands.

use crate::cli::ServerListFormat;
use crate::commands::Context;
use crate::output::{emit, Listing};
use anyhow::Result;
use faculty_app::servers::node_type_row;
use faculty_app::{
    browser_url, requested_resources, resolve_environment, resolve_project, resolve_server,
    server_spec, ssh_config_entry, wait_until_running, AppError, Platform,
};
use faculty_core::{NewServer, Server, ServerStatus};
use std::collections::HashMap;
use std::process::Command;
use std::time::Duration;
use uuid::Uuid;

const WAIT_INTERVAL: Duration = Duration::from_secs(1);

/// Builds the server listing.
///
/// Each entry pairs a server with its project name. The project column is
/// only included when servers span several projects.
#[must_use]
pub fn server_listing(entries: &[(String, Server)], include_project: bool) -> Listing {
    const HEADERS: [&str; 9] = [
        "Project Name",
        "Server Name",
        "Type",
        "Machine Type",
        "CPUs",
        "RAM",
        "Status",
        "Server ID",
        "Started",
    ];

    let skip = usize::from(!include_project);
    let mut listing = Listing::new(&HEADERS[skip..], "No servers.").with_name_column(1 - skip);

    for (project_name, server) in entries {
        let (machine_type, cpus, memory) = server_spec(server);
        let row = vec![
            project_name.clone(),
            server.name.clone(),
            server.server_type.clone(),
            machine_type,
            cpus,
            memory,
            server.status.to_string(),
            server.id.to_string(),
            server.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ];
        listing.push(row[skip..].to_vec());
    }
    listing
}

/// Lists servers in one project, or the user's servers in all projects.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or the servers cannot
/// be fetched.
pub fn list(
    platform: &dyn Platform,
    ctx: &Context,
    project: Option<&str>,
    all: bool,
    verbose: bool,
    format: Option<ServerListFormat>,
) -> Result<()> {
    let format = if verbose {
        ServerListFormat::Table
    } else {
        format.unwrap_or(ServerListFormat::List)
    };
    let shown = |server: &Server| all || server.status == ServerStatus::Running;

    let entries: Vec<(String, Server)> = match project {
        Some(project) => {
            let project_id = resolve_project(platform, project)?;
            platform
                .list_servers(project_id, None)?
                .into_iter()
                .filter(|s| shown(s))
                .map(|s| (project.to_string(), s))
                .collect()
        }
        None => {
            let user_id = platform.authenticated_user_id()?;
            let names: HashMap<Uuid, String> = platform
                .list_projects(user_id)?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect();
            platform
                .list_user_servers(user_id)?
                .into_iter()
                .filter(|s| shown(s))
                .map(|s| (names.get(&s.project_id).cloned().unwrap_or_default(), s))
                .collect()
        }
    };

    if entries.is_empty() {
        emit(&ctx.formatter.format_message("No servers."));
        return Ok(());
    }

    match format {
        ServerListFormat::List | ServerListFormat::Table => {
            let listing = server_listing(&entries, project.is_none());
            let table = format == ServerListFormat::Table;
            emit(&ctx.formatter.format_listing(&listing, table));
        }
        ServerListFormat::SshConfig => {
            let mut config = Vec::with_capacity(entries.len());
            for (project_name, server) in &entries {
                let details = platform.ssh_details(server.project_id, server.id)?;
                config.push(ssh_config_entry(&server.name, project_name, &details));
            }
            emit(&ctx.formatter.format_message(&config.join("\n")));
        }
    }
    Ok(())
}

/// Options of `faculty server new`.
#[derive(Debug, Clone)]
pub struct NewServerOptions {
    /// CPU cores for a shared server.
    pub cores: f64,
    /// Memory in GB for a shared server.
    pub memory: f64,
    /// Server type, e.g. `jupyter`.
    pub server_type: String,
    /// Dedicated machine type.
    pub machine_type: Option<String>,
    /// Server image version.
    pub version: Option<String>,
    /// Server display name.
    pub name: Option<String>,
    /// Environment names or IDs to apply.
    pub environments: Vec<String>,
    /// Whether to block until the server is running.
    pub wait: bool,
}

/// Creates a server.
///
/// # Errors
///
/// Returns an error if a name cannot be resolved or the platform rejects
/// the request.
pub fn new(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    options: NewServerOptions,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let environment_ids = options
        .environments
        .iter()
        .map(|environment| resolve_environment(platform, project_id, environment))
        .collect::<faculty_app::Result<Vec<_>>>()?;

    let request = NewServer {
        server_type: options.server_type,
        resources: requested_resources(
            options.cores,
            options.memory,
            options.machine_type.as_deref(),
        ),
        name: options.name,
        image_version: options.version,
        environment_ids,
    };
    let server_id = platform.create_server(project_id, &request)?;
    let server = platform.get_server(project_id, server_id)?;
    emit(&ctx.formatter.format_message(&format!(
        "Creating server {} in project {project}",
        server.name
    )));

    if options.wait {
        wait_until_running(platform, project_id, server_id, WAIT_INTERVAL)?;
    }
    Ok(())
}

/// Terminates a server in any state.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved or deleted.
pub fn terminate(platform: &dyn Platform, project: &str, server: &str) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), false)?;
    platform.delete_server(server_id)?;
    tracing::info!(%server_id, "terminated server");
    Ok(())
}

/// Opens a running server's web application in the browser.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved, exposes no web
/// application or the browser cannot be started.
pub fn open(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    server: Option<&str>,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, server, true)?;
    let server = platform.get_server(project_id, server_id)?;
    let url = browser_url(&server)?;

    emit(&ctx.formatter.format_message(&format!("Opening {url}")));
    launch(&url)
}

fn launch(url: &str) -> Result<()> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(windows) {
        ("cmd", vec!["/C", "start", "", url])
    } else {
        ("xdg-open", vec![url])
    };

    Command::new(program)
        .args(&args)
        .spawn()
        .map_err(|source| AppError::Process {
            program: program.to_string(),
            source,
        })?;
    Ok(())
}

/// Lists machine types for dedicated servers, cheapest first.
///
/// # Errors
///
/// Returns an error if the machine types cannot be fetched.
pub fn instance_types(platform: &dyn Platform, ctx: &Context, verbose: bool) -> Result<()> {
    let mut types = platform.list_node_types()?;
    types.sort_by(|a, b| a.cost_usd_per_hour.total_cmp(&b.cost_usd_per_hour));

    let mut listing = Listing::new(
        &["Machine Type", "CPUs", "RAM", "GPUs", "GPU Name", "Cost"],
        "No servers on dedicated infrastructure available.",
    );
    for node_type in &types {
        listing.push(node_type_row(node_type).to_vec());
    }
    emit(&ctx.formatter.format_listing(&listing, verbose));
    Ok(())
}

/// Prints the SSH hostname, port and username of a running server.
///
/// # Errors
///
/// Returns an error if the server cannot be resolved.
pub fn ssh_details(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    server: &str,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let server_id = resolve_server(platform, project_id, Some(server), true)?;
    let details = platform.ssh_details(project_id, server_id)?;

    let mut listing = Listing::new(&["Hostname", "Port", "Username"], "");
    listing.push(vec![
        details.hostname,
        details.port.to_string(),
        details.username,
    ]);
    emit(&ctx.formatter.format_listing(&listing, true));
    Ok(())
}
