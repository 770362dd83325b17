// Rust guideline compliant 2026-10-16

//! Implementation of the `faculty job` commands.

use crate::commands::Context;
use crate::output::{emit, Listing};
use crate::terminal::print_heading;
use anyhow::Result;
use chrono::{DateTime, Utc};
use faculty_app::{
    collect_runs, parse_parameter_sets, plan_run_parameters, resolve_job, resolve_project,
    select_subrun, submission_summary, AppError, Platform,
};
use faculty_core::{parse_run_identifier, LogPart, Run};

fn format_time(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

fn concat(parts: &[LogPart]) -> String {
    parts.iter().map(|part| part.content.as_str()).collect()
}

/// Builds the listing of runs.
#[must_use]
pub fn run_listing(runs: &[Run]) -> Listing {
    let mut listing = Listing::new(
        &["Number", "ID", "State", "Submitted At", "Started At", "Ended At"],
        "No runs.",
    );
    for run in runs {
        listing.push(vec![
            run.run_number.to_string(),
            run.id.to_string(),
            run.state.to_string(),
            format_time(run.submitted_at),
            format_time(run.started_at),
            format_time(run.ended_at),
        ]);
    }
    listing
}

/// Lists the jobs of a project.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or the jobs cannot be
/// fetched.
pub fn list(platform: &dyn Platform, ctx: &Context, project: &str, verbose: bool) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let jobs = platform.list_jobs(project_id)?;

    let mut listing = Listing::new(&["Name", "ID", "Description"], "No jobs.");
    for job in &jobs {
        listing.push(vec![
            job.name().to_string(),
            job.id.to_string(),
            job.metadata.description.clone(),
        ]);
    }
    emit(&ctx.formatter.format_listing(&listing, verbose));
    Ok(())
}

/// Lists every run of a job.
///
/// # Errors
///
/// Returns an error if the job cannot be resolved or a page of runs cannot
/// be fetched.
pub fn list_runs(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    job: &str,
    verbose: bool,
) -> Result<()> {
    let project_id = resolve_project(platform, project)?;
    let job_id = resolve_job(platform, project_id, job)?;
    let runs = collect_runs(platform, project_id, job_id)?;
    emit(&ctx.formatter.format_listing(&run_listing(&runs), verbose));
    Ok(())
}

/// Submits a run of a job.
///
/// Each entry of `parameter_values` is one `name=value,...` string.
///
/// # Errors
///
/// Returns an error if a parameter string is malformed, both parameters and
/// a subrun count are given, the job cannot be resolved or the platform
/// rejects the run.
pub fn run(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    job: &str,
    parameter_values: &[String],
    num_subruns: Option<usize>,
) -> Result<()> {
    let parameter_values = parse_parameter_sets(parameter_values)?;
    let parameter_values = plan_run_parameters(parameter_values, num_subruns)?;
    let project_id = resolve_project(platform, project)?;
    let job_id = resolve_job(platform, project_id, job)?;

    let run_id = platform.create_run(project_id, job_id, &parameter_values)?;
    tracing::info!(%run_id, subruns = parameter_values.len(), "submitted run");
    emit(&ctx.formatter.format_message(&submission_summary(
        job,
        project,
        parameter_values.len(),
    )));
    Ok(())
}

/// Prints the environment step and command logs of a subrun.
///
/// # Errors
///
/// Returns an error if `run` is not `N` or `N.M`, the job or run cannot be
/// found, or the run has several subruns and none was chosen.
pub fn logs(
    platform: &dyn Platform,
    ctx: &Context,
    project: &str,
    job: &str,
    run: &str,
) -> Result<()> {
    let run = parse_run_identifier(run).map_err(AppError::from)?;
    let project_id = resolve_project(platform, project)?;
    let job_id = resolve_job(platform, project_id, job)?;

    let run_details = platform.get_run(project_id, job_id, run.run_number)?;
    let subrun_number = select_subrun(&run, &run_details)?;
    let subrun = platform.get_subrun(project_id, job_id, run.run_number, subrun_number)?;

    for step in &subrun.environment_step_executions {
        print_heading(
            &format!(
                "Logs for step of environment \"{}\":",
                step.environment_name
            ),
            ctx.use_color,
        );
        let parts = platform.subrun_environment_step_logs(
            project_id,
            job_id,
            run_details.id,
            subrun.id,
            step.environment_step_id,
        )?;
        print!("{}", concat(&parts));
    }

    print_heading("Logs for job command:", ctx.use_color);
    let parts = platform.subrun_command_logs(project_id, job_id, run_details.id, subrun.id)?;
    print!("{}", concat(&parts));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(None), "-");
        let t = Utc.with_ymd_and_hms(2019, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(format_time(Some(t)), "2019-03-04 05:06");
    }

    #[test]
    fn test_concat_keeps_line_endings() {
        let parts = vec![
            LogPart {
                log_part_number: 0,
                content: "a\n".to_string(),
            },
            LogPart {
                log_part_number: 1,
                content: "b".to_string(),
            },
        ];
        assert_eq!(concat(&parts), "a\nb");
    }
}
