//! Invalid input error shared by the whole binding layer
//!
//! Every entry point that receives caller data reports a bad value the same
//! way: an [`InputError`] naming the offending parameter plus a free-form
//! message. It is raised by returning `Err` and propagates with `?`.

use std::io::{self, Write};
use thiserror::Error;

/// Result alias for operations that validate caller input
pub type InputResult<T> = Result<T, InputError>;

/// Incorrect input supplied by the caller
///
/// Both fields are set at construction and stay readable after the error
/// has been caught.
///
/// # Example
/// ```
/// use tasmanian_config::{InputError, InputResult};
///
/// fn check_depth(depth: i32) -> InputResult<i32> {
///     if depth < 0 {
///         return Err(InputError::new("depth", "depth must be non-negative"));
///     }
///     Ok(depth)
/// }
///
/// let err = check_depth(-1).unwrap_err();
/// assert_eq!(err.variable_name(), "depth");
/// assert_eq!(err.message(), "depth must be non-negative");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("incorrect input for {variable_name}: {message}")]
pub struct InputError {
    variable_name: String,
    message: String,
}

impl InputError {
    pub fn new(variable_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that received the incorrect value
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the report: `"Incorrect input for: {variable_name}"`
    pub fn headline(&self) -> String {
        format!("Incorrect input for: {}", self.variable_name)
    }

    /// Write the two-line diagnostic to stdout
    ///
    /// ```text
    /// Incorrect input for: {variable_name}
    /// {message}
    /// ```
    pub fn report(&self) {
        // a closed stdout has nowhere left to report to
        let _ = self.report_to(&mut io::stdout().lock());
    }

    /// Write the same two lines as [`InputError::report`] to `out`
    pub fn report_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.headline())?;
        writeln!(out, "{}", self.message)
    }
}
