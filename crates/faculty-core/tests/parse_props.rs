// Rust guideline compliant 2026-10-16

//! Property-based tests for the escaping parsers.

use faculty_core::parse::{escape_split, parse_parameter_values, parse_run_identifier};
use faculty_core::RunIdentifier;
use proptest::prelude::*;

/// Generates text without backslashes or delimiters.
fn arb_plain() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _.-]{0,12}").unwrap()
}

/// Generates text that may contain delimiters but no backslashes.
fn arb_field() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,=_-]{0,12}").unwrap()
}

fn escape(field: &str) -> String {
    field.replace(',', "\\,").replace('=', "\\=")
}

proptest! {
    /// Splitting text that has no delimiter returns it unchanged.
    #[test]
    fn test_split_without_delimiter_is_identity(text in arb_plain()) {
        prop_assert_eq!(escape_split(&text, ','), vec![text.clone()]);
    }

    /// The chunk count is one more than the number of unescaped delimiters.
    #[test]
    fn test_split_chunk_count(chunks in prop::collection::vec(arb_plain(), 1..6)) {
        let joined = chunks.join(",");
        let split = escape_split(&joined, ',');
        prop_assert_eq!(split, chunks);
    }

    /// Escaped delimiters survive as literal characters and never split.
    #[test]
    fn test_escaped_delimiter_is_literal(left in arb_plain(), right in arb_plain()) {
        let input = format!("{left}\\,{right}");
        prop_assert_eq!(escape_split(&input, ','), vec![format!("{left},{right}")]);
    }

    /// Escaped names and values parse back to the same pairs.
    #[test]
    fn test_escaped_pairs_parse_back(
        pairs in prop::collection::btree_map(
            prop::string::string_regex("[a-z][a-z0-9,=]{0,8}").unwrap(),
            arb_field(),
            0..5,
        )
    ) {
        let input = pairs
            .iter()
            .map(|(name, value)| format!("{}={}", escape(name), escape(value)))
            .collect::<Vec<_>>()
            .join(",");

        let parsed = parse_parameter_values(&input).unwrap();
        prop_assert_eq!(parsed.len(), pairs.len());
        for (name, value) in &pairs {
            prop_assert_eq!(parsed.get(name), Some(value));
        }
    }

    /// Formatted run identifiers parse back to themselves.
    #[test]
    fn test_run_identifier_display_parses_back(
        run in 0u64..1_000_000,
        subrun in prop::option::of(0u64..1_000),
    ) {
        let id = RunIdentifier::new(run, subrun);
        prop_assert_eq!(parse_run_identifier(&id.to_string()).unwrap(), id);
    }
}
