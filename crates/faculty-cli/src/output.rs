// Rust guideline compliant 2026-10-16

//! Output formatting module for the Faculty CLI.
//!
//! Commands describe their results as [`Listing`]s and messages; a formatter
//! renders them as aligned text or as JSON.

use faculty_app::ErrorEnvelope;
use serde_json::{json, Map, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Tabular command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    name_column: usize,
    empty_message: &'static str,
}

impl Listing {
    /// Creates an empty listing.
    ///
    /// # Arguments
    /// * `headers` - Column headers
    /// * `empty_message` - Shown by verbose output when there are no rows
    #[must_use]
    pub fn new(headers: &[&'static str], empty_message: &'static str) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
            name_column: 0,
            empty_message,
        }
    }

    /// Selects the column printed by non-verbose output.
    #[must_use]
    pub fn with_name_column(mut self, column: usize) -> Self {
        self.name_column = column;
        self
    }

    /// Appends a row; it must have one cell per header.
    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    /// Returns whether the listing has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the column headers.
    #[must_use]
    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the message for an empty listing.
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }
}

fn json_key(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}

/// Output formatter trait.
///
/// Defines the interface for rendering command results.
pub trait OutputFormatter {
    /// Formats a listing.
    ///
    /// # Arguments
    /// * `listing` - The rows to format
    /// * `verbose` - Whether to show every column or just names
    ///
    /// # Returns
    /// The rendered listing, possibly empty
    fn format_listing(&self, listing: &Listing, verbose: bool) -> String;

    /// Formats an informational message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &ErrorEnvelope) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, listing: &Listing, _verbose: bool) -> String {
        let records: Vec<Value> = listing
            .rows
            .iter()
            .map(|row| {
                let record: Map<String, Value> = listing
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(header, cell)| (json_key(header), Value::String(cell.clone())))
                    .collect();
                Value::Object(record)
            })
            .collect();
        serde_json::to_string_pretty(&records)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize listing" }).to_string())
    }

    fn format_message(&self, message: &str) -> String {
        json!({ "message": message }).to_string()
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        serde_json::to_string(error)
            .unwrap_or_else(|_| json!({ "error": error.message }).to_string())
    }
}

/// Text output formatter.
///
/// Prints names one per line, or an aligned table in verbose mode.
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_listing(&self, listing: &Listing, verbose: bool) -> String {
        if !verbose {
            return listing
                .rows
                .iter()
                .filter_map(|row| row.get(listing.name_column))
                .cloned()
                .collect::<Vec<_>>()
                .join("\n");
        }

        if listing.is_empty() {
            return listing.empty_message.to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(listing.headers.iter().map(ToString::to_string));
        for row in &listing.rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();
        table.with(Style::blank());
        table.to_string()
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        let mut buffer = if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", error.message);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether to produce JSON
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
#[must_use]
pub fn create_formatter(json: bool, use_color: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter::new(use_color))
    }
}

/// Prints formatted output to stdout unless it is empty.
pub fn emit(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
