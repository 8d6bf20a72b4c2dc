//! Tests for InputError
//!
//! The error must stay distinguishable from other failures and keep both
//! fields readable after it has been caught.

use std::error::Error;
use std::fmt;
use tasmanian_config::{InputError, InputResult, LibraryComponent};

fn set_depth(depth: i32) -> InputResult<i32> {
    if depth < 0 {
        return Err(InputError::new("depth", "depth must be a non-negative integer"));
    }
    Ok(depth)
}

fn make_grid(depth: i32) -> InputResult<String> {
    let depth = set_depth(depth)?;
    Ok(format!("grid of depth {depth}"))
}

#[derive(Debug)]
struct OtherError;

impl fmt::Display for OtherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("something else failed")
    }
}

impl Error for OtherError {}

#[test]
fn test_fields_are_readable_after_catching() {
    let err = InputError::new("x", "bad value");

    assert_eq!(err.variable_name(), "x");
    assert_eq!(err.message(), "bad value");
}

#[test]
fn test_report_emits_two_lines_in_order() {
    let err = InputError::new("x", "bad value");
    let mut out = Vec::new();

    err.report_to(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Incorrect input for: x", "bad value"]);

    // reporting does not consume or alter the error
    assert_eq!(err.variable_name(), "x");
    assert_eq!(err.message(), "bad value");
}

#[test]
fn test_message_is_written_verbatim() {
    let err = InputError::new("", "  spaced {braces} %s ");
    let mut out = Vec::new();

    err.report_to(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Incorrect input for: \n  spaced {braces} %s \n"
    );
}

#[test]
fn test_question_mark_unwinds_the_call() {
    let err = make_grid(-3).unwrap_err();

    assert_eq!(err.variable_name(), "depth");
    assert_eq!(err.message(), "depth must be a non-negative integer");
    assert_eq!(make_grid(2).unwrap(), "grid of depth 2");
}

#[test]
fn test_distinguishable_from_other_errors() {
    let failures: Vec<Box<dyn Error + Send + Sync>> = vec![
        Box::new(InputError::new("x", "bad value")),
        Box::new(OtherError),
    ];

    let input_errors: Vec<&InputError> = failures
        .iter()
        .filter_map(|failure| failure.downcast_ref::<InputError>())
        .collect();

    assert_eq!(input_errors.len(), 1);
    assert_eq!(input_errors[0].variable_name(), "x");
    assert!(failures[1].downcast_ref::<InputError>().is_none());
}

#[test]
fn test_unknown_component_is_an_input_error() {
    let err = "lapack".parse::<LibraryComponent>().unwrap_err();

    assert_eq!(err.variable_name(), "component");
    assert_eq!(
        err.message(),
        "unknown library component 'lapack', expected one of: sparsegrid, dream, caddons"
    );
}
