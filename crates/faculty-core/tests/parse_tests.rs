// Rust guideline compliant 2026-10-16

//! Unit tests for parameter string and run identifier parsing.

use faculty_core::parse::{escape_split, parse_parameter_values, parse_run_identifier};
use faculty_core::{Error, RunIdentifier};
use std::collections::HashMap;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_escape_split_plain() {
    assert_eq!(
        escape_split("foo=eggs,bar=spam", ','),
        vec!["foo=eggs", "bar=spam"]
    );
}

#[test]
fn test_escape_split_no_delimiter() {
    assert_eq!(escape_split("foo", ','), vec!["foo"]);
}

#[test]
fn test_escape_split_escaped_delimiter() {
    assert_eq!(
        escape_split(r"foo\,bar,eggs\,spam", ','),
        vec!["foo,bar", "eggs,spam"]
    );
}

#[test]
fn test_escape_split_empty_input_yields_one_empty_chunk() {
    assert_eq!(escape_split("", ','), vec![""]);
}

#[test]
fn test_escape_split_keeps_empty_chunks() {
    assert_eq!(escape_split(",a,,b,", ','), vec!["", "a", "", "b", ""]);
}

#[test]
fn test_escape_split_non_delimiter_escape_is_preserved() {
    assert_eq!(escape_split(r"a\nb,c", ','), vec![r"a\nb", "c"]);
}

#[test]
fn test_escape_split_trailing_backslash_is_literal() {
    assert_eq!(escape_split(r"foo\", ','), vec![r"foo\"]);
    assert_eq!(escape_split(r"a,b\", ','), vec!["a", r"b\"]);
}

#[test]
fn test_parse_parameter_values_accepted() {
    let cases: Vec<(&str, HashMap<String, String>)> = vec![
        ("foo=1,bar=2", values(&[("foo", "1"), ("bar", "2")])),
        ("foo=1", values(&[("foo", "1")])),
        ("foo=", values(&[("foo", "")])),
        ("foo= bar ", values(&[("foo", " bar ")])),
        (
            r"spam=bar\=1,eggs=a\,2",
            values(&[("spam", "bar=1"), ("eggs", "a,2")]),
        ),
        ("foo=1,", values(&[("foo", "1")])),
        (",foo=1", values(&[("foo", "1")])),
        ("foo=1,,bar=2", values(&[("foo", "1"), ("bar", "2")])),
        ("", values(&[])),
        (",,", values(&[])),
    ];

    for (input, expected) in cases {
        let parsed = parse_parameter_values(input)
            .unwrap_or_else(|e| panic!("{input:?} should parse: {e}"));
        assert_eq!(parsed, expected, "input {input:?}");
    }
}

#[test]
fn test_parse_parameter_values_last_write_wins() {
    let parsed = parse_parameter_values("foo=1,foo=2").unwrap();
    assert_eq!(parsed, values(&[("foo", "2")]));
}

#[test]
fn test_parse_parameter_values_escaped_equals_in_name() {
    let parsed = parse_parameter_values(r"a\=b=c").unwrap();
    assert_eq!(parsed, values(&[("a=b", "c")]));
}

#[test]
fn test_parse_parameter_values_rejected() {
    for input in ["foo", "foo==1", "a=1,b", " "] {
        let err = parse_parameter_values(input).expect_err(input);
        assert!(
            matches!(err, Error::InvalidParameterValue(_)),
            "unexpected error for {input:?}: {err:?}"
        );
        assert!(err.to_string().starts_with("Invalid parameter value"));
    }
}

#[test]
fn test_parse_parameter_values_error_names_chunk() {
    let err = parse_parameter_values("ok=1,broken").unwrap_err();
    assert_eq!(err.to_string(), "Invalid parameter value: broken");
}

#[test]
fn test_parse_run_identifier_accepted() {
    assert_eq!(
        parse_run_identifier("2.3").unwrap(),
        RunIdentifier::new(2, Some(3))
    );
    assert_eq!(parse_run_identifier("2").unwrap(), RunIdentifier::new(2, None));
}

#[test]
fn test_parse_run_identifier_from_str() {
    let run: RunIdentifier = "12.1".parse().unwrap();
    assert_eq!(run.run_number, 12);
    assert_eq!(run.subrun_number, Some(1));
}

#[test]
fn test_parse_run_identifier_rejected() {
    for input in ["bad argument", "two.one", "2.one", "2.", "2.3.2", "1e3", "", " 2", "-1"] {
        let err = parse_run_identifier(input).expect_err(input);
        assert!(matches!(err, Error::InvalidRunIdentifier(ref s) if s == input));
        assert_eq!(err.to_string(), format!("Invalid run identifier: {input}"));
    }
}
