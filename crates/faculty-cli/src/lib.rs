// Rust guideline compliant 2026-10-16

//! Faculty CLI library.
//!
//! This library exposes the command grammar, command implementations and
//! output helpers for use in tests and the `faculty` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use cli::Cli;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

use anyhow::Result;
use clap::CommandFactory;
use cli::{
    Commands, DatasetsAction, EnvironmentAction, FileAction, JobAction, ProjectAction,
    ServerAction,
};
use commands::file::Transfer;
use commands::server::NewServerOptions;
use commands::{connect, Context};
use faculty_app::{AppError, ErrorCode, ErrorEnvelope, SyncDirection};

/// Runs a parsed command line.
///
/// # Returns
///
/// The process exit code; non-zero when a wrapped program failed.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub fn run(cli: Cli) -> Result<i32> {
    let use_color = !cli.no_color && should_use_color();
    let ctx = Context {
        formatter: create_formatter(cli.json, use_color),
        use_color,
    };

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(0);
    };

    match command {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Login => commands::login::execute()?,
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "faculty", &mut std::io::stdout());
        }
        Commands::Project { action } => {
            let platform = connect()?;
            match action {
                ProjectAction::List { verbose } => {
                    commands::project::list(&platform, &ctx, verbose)?;
                }
                ProjectAction::New { name } => commands::project::new(&platform, &ctx, &name)?,
            }
        }
        Commands::Server { action } => {
            let platform = connect()?;
            match action {
                ServerAction::List {
                    project,
                    all,
                    verbose,
                    format,
                } => {
                    let project = project.as_deref();
                    commands::server::list(&platform, &ctx, project, all, verbose, format)?;
                }
                ServerAction::New {
                    project,
                    cores,
                    memory,
                    server_type,
                    machine_type,
                    version,
                    name,
                    environments,
                    wait,
                } => {
                    let options = NewServerOptions {
                        cores,
                        memory,
                        server_type,
                        machine_type,
                        version,
                        name,
                        environments,
                        wait,
                    };
                    commands::server::new(&platform, &ctx, &project, options)?;
                }
                ServerAction::Terminate { project, server } => {
                    commands::server::terminate(&platform, &project, &server)?;
                }
                ServerAction::Open { project, server } => {
                    commands::server::open(&platform, &ctx, &project, server.as_deref())?;
                }
                ServerAction::InstanceTypes { verbose } => {
                    commands::server::instance_types(&platform, &ctx, verbose)?;
                }
                ServerAction::SshDetails { project, server } => {
                    commands::server::ssh_details(&platform, &ctx, &project, &server)?;
                }
            }
        }
        Commands::Shell {
            project,
            server,
            ssh_opts,
        } => {
            let platform = connect()?;
            return commands::shell::execute(&platform, &project, &server, &ssh_opts);
        }
        Commands::Environment { action } => {
            let platform = connect()?;
            match action {
                EnvironmentAction::List { project, verbose } => {
                    commands::environment::list(&platform, &ctx, &project, verbose)?;
                }
                EnvironmentAction::Apply {
                    project,
                    server,
                    environment,
                } => {
                    commands::environment::apply(&platform, &ctx, &project, &server, &environment)?;
                }
                EnvironmentAction::Status { project, server } => {
                    commands::environment::status(&platform, &ctx, &project, &server)?;
                }
                EnvironmentAction::Logs {
                    project,
                    server,
                    step,
                } => commands::environment::logs(&platform, &ctx, &project, &server, step)?,
            }
        }
        Commands::Job { action } => {
            let platform = connect()?;
            match action {
                JobAction::List { project, verbose } => {
                    commands::job::list(&platform, &ctx, &project, verbose)?;
                }
                JobAction::ListRuns {
                    project,
                    job,
                    verbose,
                } => commands::job::list_runs(&platform, &ctx, &project, &job, verbose)?,
                JobAction::Run {
                    project,
                    job,
                    parameter_values,
                    num_subruns,
                } => {
                    let values = &parameter_values;
                    commands::job::run(&platform, &ctx, &project, &job, values, num_subruns)?;
                }
                JobAction::Logs { project, job, run } => {
                    commands::job::logs(&platform, &ctx, &project, &job, &run)?;
                }
            }
        }
        Commands::File { action } => {
            let platform = connect()?;
            return match action {
                FileAction::Put {
                    project,
                    local,
                    remote,
                    server,
                } => {
                    let (local, remote, server) = (&local, &remote, server.as_deref());
                    commands::file::copy(&platform, &project, Transfer::Put, local, remote, server)
                }
                FileAction::Get {
                    project,
                    remote,
                    local,
                    server,
                } => {
                    let (local, remote, server) = (&local, &remote, server.as_deref());
                    commands::file::copy(&platform, &project, Transfer::Get, local, remote, server)
                }
                FileAction::SyncUp {
                    project,
                    local,
                    remote,
                    server,
                    rsync_opts,
                } => commands::file::sync(
                    &platform,
                    &project,
                    SyncDirection::Up,
                    &local,
                    &remote,
                    server.as_deref(),
                    &rsync_opts,
                ),
                FileAction::SyncDown {
                    project,
                    remote,
                    local,
                    server,
                    rsync_opts,
                } => commands::file::sync(
                    &platform,
                    &project,
                    SyncDirection::Down,
                    &local,
                    &remote,
                    server.as_deref(),
                    &rsync_opts,
                ),
                FileAction::Ls { project, path } => {
                    commands::file::ls(&platform, &ctx, &project, &path).map(|()| 0)
                }
            };
        }
        Commands::Datasets { action } => {
            let platform = connect()?;
            match action {
                DatasetsAction::Ls {
                    project,
                    prefix,
                    show_hidden,
                } => commands::datasets::ls(&platform, &ctx, &project, &prefix, show_hidden)?,
                DatasetsAction::Get {
                    project,
                    project_path,
                    local_path,
                } => commands::datasets::get(&platform, &project, &project_path, &local_path)?,
                DatasetsAction::Put {
                    project,
                    local_path,
                    project_path,
                } => commands::datasets::put(&platform, &project, &local_path, &project_path)?,
                DatasetsAction::Mv {
                    project,
                    source_path,
                    destination_path,
                } => commands::datasets::mv(&platform, &project, &source_path, &destination_path)?,
                DatasetsAction::Cp {
                    project,
                    source_path,
                    destination_path,
                    recursive,
                } => {
                    let (source, destination) = (&source_path, &destination_path);
                    commands::datasets::cp(&platform, &project, source, destination, recursive)?;
                }
                DatasetsAction::Rm {
                    project,
                    project_path,
                    recursive,
                } => commands::datasets::rm(&platform, &project, &project_path, recursive)?,
            }
        }
    }

    Ok(0)
}

/// Returns the process exit code for a command error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AppError>().map_or(1, AppError::exit_code)
}

/// Builds the error envelope reported for a command error.
#[must_use]
pub fn error_envelope(err: &anyhow::Error) -> ErrorEnvelope {
    match err.downcast_ref::<AppError>() {
        Some(app) => ErrorEnvelope::from_error(app),
        None => ErrorEnvelope {
            code: ErrorCode::Unknown,
            message: format!("{err:#}"),
            exit_code: 1,
        },
    }
}
