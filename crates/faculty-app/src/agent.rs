// Rust guideline compliant 2026-10-16

//! The agent running on each server, which applies environments.

use crate::error::{AppError, Result};
use faculty_core::{EnvironmentExecution, StepLogLine};
use std::io::BufRead;
use uuid::Uuid;

const LOGS_EVENT: &str = "logs";
const DONE_EVENT: &str = "done";

/// Operations against the agent of one running server.
pub trait ServerAgent {
    /// Returns the most recent environment execution, or `None` if no
    /// environment has been applied to the server yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent cannot be reached.
    fn latest_environment_execution(&self) -> Result<Option<EnvironmentExecution>>;

    /// Streams the output of one execution step, calling `on_line` for each
    /// line until the step finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be opened or decoded.
    fn stream_environment_step_logs(
        &self,
        execution_id: Uuid,
        step_id: Uuid,
        on_line: &mut dyn FnMut(&StepLogLine),
    ) -> Result<()>;
}

/// Decodes a server-sent event stream of step output.
///
/// `logs` events carry a JSON array of lines; a `done` event ends the stream.
/// Other events and comment lines are skipped.
///
/// # Errors
///
/// Returns an error if reading fails or a `logs` event is not valid JSON.
pub fn read_log_stream(
    reader: impl BufRead,
    on_line: &mut dyn FnMut(&StepLogLine),
) -> Result<()> {
    let mut event = String::new();
    let mut data = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            if dispatch(&event, &data, on_line)? {
                return Ok(());
            }
            event.clear();
            data.clear();
            continue;
        }
        if line.starts_with(':') {
            continue;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };
        match field {
            "event" => {
                event.clear();
                event.push_str(value);
            }
            "data" => {
                if !data.is_empty() {
                    data.push('\n');
                }
                data.push_str(value);
            }
            _ => {}
        }
    }

    dispatch(&event, &data, on_line)?;
    Ok(())
}

// Returns true once the stream reports the step is done.
fn dispatch(event: &str, data: &str, on_line: &mut dyn FnMut(&StepLogLine)) -> Result<bool> {
    match event {
        LOGS_EVENT => {
            let lines: Vec<StepLogLine> = serde_json::from_str(data).map_err(|err| {
                AppError::UnexpectedResponse(format!("could not decode log event: {err}"))
            })?;
            for line in &lines {
                on_line(line);
            }
            Ok(false)
        }
        DONE_EVENT => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(stream: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        read_log_stream(stream.as_bytes(), &mut |line: &StepLogLine| {
            lines.push(line.content.clone());
        })?;
        Ok(lines)
    }

    #[test]
    fn test_logs_events_until_done() {
        let stream = "event: logs\n\
                      data: [{\"lineNumber\": 1, \"content\": \"Collecting numpy\"}]\n\
                      \n\
                      : keep-alive\n\
                      event: logs\n\
                      data: [{\"lineNumber\": 2, \"content\": \"Installed\"},\n\
                      data: {\"lineNumber\": 3, \"content\": \"\"}]\n\
                      \n\
                      event: done\n\
                      data: {}\n\
                      \n\
                      event: logs\n\
                      data: [{\"lineNumber\": 4, \"content\": \"after done\"}]\n\
                      \n";
        assert_eq!(
            collect(stream).unwrap(),
            vec!["Collecting numpy", "Installed", ""]
        );
    }

    #[test]
    fn test_unknown_events_are_skipped() {
        let stream = "event: heartbeat\ndata: nonsense\n\nevent: done\n\n";
        assert!(collect(stream).unwrap().is_empty());
    }

    #[test]
    fn test_stream_ending_without_blank_line() {
        let stream = "event: logs\ndata: [{\"lineNumber\": 1, \"content\": \"last\"}]";
        assert_eq!(collect(stream).unwrap(), vec!["last"]);
    }

    #[test]
    fn test_malformed_logs_event() {
        let err = collect("event: logs\ndata: not json\n\n").unwrap_err();
        assert!(matches!(err, AppError::UnexpectedResponse(_)));
    }
}
