// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the Faculty CLI.
//!
//! This module provides color support, prompts and other terminal helpers.

use std::env;
use std::io::{self, BufRead, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Returns whether standard input is an interactive terminal.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Prints a heading line to stdout, in yellow when color is enabled.
pub fn print_heading(text: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    let _ = write!(stdout, "{text}");
    let _ = stdout.reset();
    let _ = writeln!(stdout);
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{prefix}: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{message}");
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("!", Color::Yellow, message);
}

/// Asks for a line of input on stderr, falling back to `default` when the
/// answer is blank.
///
/// # Errors
///
/// Returns an error if stdin is closed or unreadable.
pub fn prompt(label: &str, default: Option<&str>) -> io::Result<String> {
    let mut stderr = io::stderr();
    match default {
        Some(default) => write!(stderr, "{label} [{default}]: ")?,
        None => write!(stderr, "{label}: ")?,
    }
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    let answer = line.trim();
    Ok(match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer.to_string(),
    })
}

/// Asks for a secret without echoing it.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn prompt_secret(label: &str) -> io::Result<String> {
    rpassword::prompt_password(format!("{label}: ")).map(|s| s.trim().to_string())
}

/// Asks a yes/no question, defaulting to no.
///
/// # Errors
///
/// Returns an error if stdin is closed or unreadable.
pub fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"), None)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
