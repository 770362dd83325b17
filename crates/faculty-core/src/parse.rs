// Rust guideline compliant 2026-10-16

//! Parsers for structured command-line arguments.
//!
//! Two argument shapes are handled here:
//! - job parameter strings, `name1=value1,name2=value2`, where `\,` and `\=`
//!   put a literal delimiter inside a name or value
//! - run identifiers, `N` or `N.M`, selecting a run and optionally a subrun

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Character that makes the following delimiter literal.
pub const ESCAPE_CHAR: char = '\\';

/// Separates `name=value` pairs in a parameter string.
pub const PAIR_DELIMITER: char = ',';

/// Separates a name from its value.
pub const VALUE_DELIMITER: char = '=';

/// Parameter values for a single job run, keyed by parameter name.
pub type ParameterValues = HashMap<String, String>;

/// Splits `input` on `delimiter`, honouring backslash escapes.
///
/// An escaped delimiter is kept in the chunk without its backslash. A
/// backslash before any other character is kept verbatim, and a trailing
/// lone backslash is kept as well. The result always holds at least one
/// chunk, which may be empty.
///
/// # Arguments
///
/// * `input` - The text to split
/// * `delimiter` - The character to split on
///
/// # Returns
///
/// The chunks in input order.
#[must_use]
pub fn escape_split(input: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut chunk = String::new();
    let mut escape_pending = false;

    for character in input.chars() {
        if escape_pending {
            if character != delimiter {
                chunk.push(ESCAPE_CHAR);
            }
            chunk.push(character);
            escape_pending = false;
        } else if character == ESCAPE_CHAR {
            escape_pending = true;
        } else if character == delimiter {
            parts.push(std::mem::take(&mut chunk));
        } else {
            chunk.push(character);
        }
    }

    if escape_pending {
        chunk.push(ESCAPE_CHAR);
    }
    parts.push(chunk);

    parts
}

/// Parses a `name=value,name=value` string into parameter values.
///
/// Empty chunks (leading, trailing or doubled commas) are skipped. Whitespace
/// is significant and never trimmed. A repeated name keeps its last value.
///
/// # Arguments
///
/// * `input` - The parameter string taken from the command line
///
/// # Returns
///
/// The parsed parameter values; empty for an empty input.
///
/// # Errors
///
/// Returns `Error::InvalidParameterValue` with the offending chunk if a chunk
/// has no unescaped `=` or more than one.
pub fn parse_parameter_values(input: &str) -> Result<ParameterValues> {
    let mut values = ParameterValues::new();

    for chunk in escape_split(input, PAIR_DELIMITER) {
        if chunk.is_empty() {
            continue;
        }
        let mut pair = escape_split(&chunk, VALUE_DELIMITER);
        if pair.len() != 2 {
            return Err(Error::InvalidParameterValue(chunk));
        }
        let value = pair.pop().unwrap_or_default();
        let name = pair.pop().unwrap_or_default();
        values.insert(name, value);
    }

    Ok(values)
}

/// Identifies a job run, and optionally one of its subruns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunIdentifier {
    /// Run number within the job.
    pub run_number: u64,
    /// Subrun number within the run, if given.
    pub subrun_number: Option<u64>,
}

impl RunIdentifier {
    /// Creates a run identifier.
    #[must_use]
    pub fn new(run_number: u64, subrun_number: Option<u64>) -> Self {
        Self {
            run_number,
            subrun_number,
        }
    }
}

impl fmt::Display for RunIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subrun_number {
            Some(subrun) => write!(f, "{}.{}", self.run_number, subrun),
            None => write!(f, "{}", self.run_number),
        }
    }
}

impl FromStr for RunIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_run_identifier(s)
    }
}

/// Parses a run identifier of the form `N` or `N.M`.
///
/// # Arguments
///
/// * `input` - The identifier taken from the command line
///
/// # Returns
///
/// The parsed run identifier.
///
/// # Errors
///
/// Returns `Error::InvalidRunIdentifier` naming `input` if it has more than
/// two segments or any segment is not a plain decimal number.
pub fn parse_run_identifier(input: &str) -> Result<RunIdentifier> {
    let invalid = || Error::InvalidRunIdentifier(input.to_string());

    let numbers = input
        .split('.')
        .map(|segment| parse_decimal(segment).ok_or_else(invalid))
        .collect::<Result<Vec<u64>>>()?;

    match numbers.as_slice() {
        [run] => Ok(RunIdentifier::new(*run, None)),
        [run, subrun] => Ok(RunIdentifier::new(*run, Some(*subrun))),
        _ => Err(invalid()),
    }
}

// Digits only: rejects signs, exponents and surrounding whitespace.
fn parse_decimal(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_split_escaped_backslash_is_kept() {
        assert_eq!(escape_split(r"a\\b", ','), vec![r"a\\b".to_string()]);
    }

    #[test]
    fn test_escape_split_escape_before_other_delimiter() {
        // `\=` is only special when splitting on `=`.
        assert_eq!(escape_split(r"a\=b", ','), vec![r"a\=b".to_string()]);
        assert_eq!(escape_split(r"a\=b", '='), vec!["a=b".to_string()]);
    }

    #[test]
    fn test_parse_decimal_rejects_sign() {
        assert_eq!(parse_decimal("+2"), None);
        assert_eq!(parse_decimal("-2"), None);
        assert_eq!(parse_decimal("02"), Some(2));
    }

    #[test]
    fn test_run_identifier_display() {
        assert_eq!(RunIdentifier::new(4, None).to_string(), "4");
        assert_eq!(RunIdentifier::new(4, Some(1)).to_string(), "4.1");
    }
}
