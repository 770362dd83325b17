// Rust guideline compliant 2026-10-16

//! Job run planning, listing and log selection.

use crate::error::{AppError, Result};
use crate::platform::Platform;
use faculty_core::{parse_parameter_values, ParameterValues, Run, RunIdentifier};
use uuid::Uuid;

/// Parses one `name=value,...` string per subrun.
///
/// # Errors
///
/// Returns the parse error of the first malformed string.
pub fn parse_parameter_sets(inputs: &[String]) -> Result<Vec<ParameterValues>> {
    inputs
        .iter()
        .map(|input| parse_parameter_values(input).map_err(AppError::from))
        .collect()
}

/// Works out the parameter sets of a new run, one per subrun.
///
/// With neither parameters nor a subrun count, a single subrun without
/// parameters is planned. A subrun count without parameters plans that many
/// empty parameter sets.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when both parameters and a subrun count
/// are given.
pub fn plan_run_parameters(
    parameter_values: Vec<ParameterValues>,
    num_subruns: Option<usize>,
) -> Result<Vec<ParameterValues>> {
    match (parameter_values.is_empty(), num_subruns) {
        (true, None) => Ok(vec![ParameterValues::new()]),
        (false, None) => Ok(parameter_values),
        (true, Some(count)) => Ok(vec![ParameterValues::new(); count]),
        (false, Some(_)) => Err(AppError::InvalidInput(
            "Cannot set both 'parameter_values' and 'num_subruns'.".to_string(),
        )),
    }
}

/// Describes a submitted run for the confirmation message.
#[must_use]
pub fn submission_summary(job: &str, project: &str, subruns: usize) -> String {
    if subruns == 1 {
        format!("Submitted run of job '{job}' in project '{project}'")
    } else {
        format!("Submitted run array of job '{job}' in project '{project}' with {subruns} subruns")
    }
}

/// Picks the subrun whose logs to show.
///
/// An explicit subrun number always wins. Otherwise the run must have
/// exactly one subrun.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when no subrun was given and the run
/// does not have exactly one.
pub fn select_subrun(identifier: &RunIdentifier, run: &Run) -> Result<u64> {
    if let Some(subrun_number) = identifier.subrun_number {
        return Ok(subrun_number);
    }
    match run.subruns.as_slice() {
        [only] => Ok(only.subrun_number),
        subruns => Err(AppError::InvalidInput(format!(
            "Run {n} has {count} subruns. \
             You must specify the subrun to show logs from, e.g. '{n}.1'.",
            n = identifier.run_number,
            count = subruns.len(),
        ))),
    }
}

/// Lists every run of a job, following pagination to the last page.
///
/// # Errors
///
/// Returns an error if any page cannot be fetched.
pub fn collect_runs(platform: &dyn Platform, project_id: Uuid, job_id: Uuid) -> Result<Vec<Run>> {
    let mut page = platform.list_runs(project_id, job_id, None)?;
    let mut runs = std::mem::take(&mut page.runs);

    while let Some(next) = page.pagination.next {
        tracing::debug!(start = next.start, limit = next.limit, "fetching next page of runs");
        page = platform.list_runs(project_id, job_id, Some(next))?;
        runs.append(&mut page.runs);
    }

    Ok(runs)
}
