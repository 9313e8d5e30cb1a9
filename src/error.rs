//! Error types for the payroll CLI.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while running a payroll session.

use thiserror::Error;

/// The main error type for the payroll CLI.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application. Only
/// [`PayrollError::InvalidChoice`] is recovered from within the session
/// loop; every other variant ends the session.
///
/// # Examples
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidAmount {
///     input: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid amount 'abc': expected a number");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A monetary prompt received text that does not parse as a number.
    #[error("Invalid amount '{input}': expected a number")]
    InvalidAmount {
        /// The reply that failed to parse, with surrounding whitespace trimmed.
        input: String,
    },

    /// A menu prompt received something other than the options `1`-`4`.
    #[error("Invalid menu choice: '{input}'")]
    InvalidChoice {
        /// The reply that matched no menu option.
        input: String,
    },

    /// The input stream ended while a reply was still expected.
    #[error("Input ended unexpectedly while waiting for a reply")]
    UnexpectedEof,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O failure.
        #[from]
        source: std::io::Error,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
