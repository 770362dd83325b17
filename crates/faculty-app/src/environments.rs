// Rust guideline compliant 2026-10-16

//! Inspecting environment executions through a server's agent.

use crate::agent::ServerAgent;
use crate::error::{AppError, Result};
use faculty_core::{EnvironmentExecution, ExecutionStep, Server, StepLogLine};

/// Name of the server service the agent listens on.
pub const AGENT_SERVICE: &str = "hound";

/// Returns the base URL of a server's agent.
///
/// # Errors
///
/// Returns `AppError::MissingService` if the server runs no agent.
pub fn agent_url(server: &Server) -> Result<String> {
    let service = server.service(AGENT_SERVICE).ok_or_else(|| {
        AppError::MissingService(format!(
            "Server {} has no service called {AGENT_SERVICE}",
            server.name
        ))
    })?;
    Ok(format!("{}://{}:{}", service.scheme, service.host, service.port))
}

/// Returns the latest environment execution on a server.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no environment has been applied yet.
pub fn latest_execution(agent: &dyn ServerAgent) -> Result<EnvironmentExecution> {
    agent.latest_environment_execution()?.ok_or_else(|| {
        AppError::NotFound("No environment has yet been applied to this server.".to_string())
    })
}

/// Joins a command line for display, quoting arguments that contain
/// whitespace.
#[must_use]
pub fn format_command(command: &[String]) -> String {
    command
        .iter()
        .map(|part| {
            if part.split_whitespace().count() > 1 {
                quote_argument(part)
            } else {
                part.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_argument(part: &str) -> String {
    let quote = if part.contains('\'') && !part.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(part.len() + 2);
    quoted.push(quote);
    for c in part.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

/// Describes an execution and each of its steps, one output line per entry.
///
/// Environments and steps are numbered from zero.
#[must_use]
pub fn execution_summary(execution: &EnvironmentExecution) -> Vec<String> {
    let mut lines = vec![
        "Latest environment execution:".to_string(),
        format!("  Status: {}", execution.status),
    ];
    for (i, environment) in execution.environments.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Environment {i}"));
        for (j, step) in environment.steps.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("Step {j}:"));
            lines.push(format!("  Status:  {}", step.status));
            lines.push(format!("  Command: {}", format_command(&step.command)));
        }
    }
    lines
}

/// Picks the steps to show logs for: all of them, or the one at `step` in
/// the flattened, zero-based step list.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `step` is out of range.
pub fn select_steps(
    execution: &EnvironmentExecution,
    step: Option<usize>,
) -> Result<Vec<&ExecutionStep>> {
    let steps: Vec<&ExecutionStep> = execution.steps().collect();
    match step {
        None => Ok(steps),
        Some(index) => steps
            .get(index)
            .map(|step| vec![*step])
            .ok_or_else(|| AppError::InvalidInput(format!("step {index} out of range"))),
    }
}

/// Streams the output of the selected steps of an execution, in order.
///
/// # Errors
///
/// Returns an error if `step` is out of range or a stream fails.
pub fn stream_step_logs(
    agent: &dyn ServerAgent,
    execution: &EnvironmentExecution,
    step: Option<usize>,
    on_line: &mut dyn FnMut(&str),
) -> Result<()> {
    for selected in select_steps(execution, step)? {
        let mut forward = |line: &StepLogLine| on_line(&line.content);
        agent.stream_environment_step_logs(execution.id, selected.id, &mut forward)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_format_command_quotes_parts_with_spaces() {
        assert_eq!(
            format_command(&command(&["bash", "-c", "pip install numpy"])),
            "bash -c 'pip install numpy'"
        );
    }

    #[test]
    fn test_format_command_keeps_single_words() {
        assert_eq!(format_command(&command(&["conda", "list"])), "conda list");
        assert_eq!(format_command(&command(&[" padded "])), " padded ");
    }

    #[test]
    fn test_quoting_switches_to_double_quotes_around_apostrophes() {
        assert_eq!(
            format_command(&command(&["echo", "it's done"])),
            "echo \"it's done\""
        );
        assert_eq!(
            format_command(&command(&["echo", "say \"it's\""])),
            "echo 'say \"it\\'s\"'"
        );
    }
}
