//! Line-oriented prompt and reply helpers.
//!
//! Each helper takes the input and output streams explicitly so the
//! session stays generic over where its lines come from and go to.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Reads one reply line, without its trailing newline.
///
/// Only the line terminator (`\n` or `\r\n`) is stripped; the reply is
/// otherwise returned as typed. Zero bytes read means the input stream is
/// closed while a reply was expected, reported as
/// [`PayrollError::UnexpectedEof`].
pub fn read_reply(input: &mut impl BufRead) -> PayrollResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PayrollError::UnexpectedEof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Writes `prompt` without a trailing newline, flushes, and reads the reply.
pub fn prompt_reply(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> PayrollResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_reply(input)
}

/// Prompts for a monetary amount and parses the reply as a [`Decimal`].
///
/// The reply is whitespace-trimmed before parsing, so `" 70000 "` is
/// accepted. A reply that does not parse as a number is
/// [`PayrollError::InvalidAmount`], which ends the session.
///
/// # Examples
///
/// ```
/// use payroll_engine::cli::prompt_amount;
/// use rust_decimal::Decimal;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("70000.50\n");
/// let mut output = Vec::new();
/// let amount = prompt_amount(&mut input, &mut output, "Enter Base Salary: ₹")?;
/// assert_eq!(amount, Decimal::new(7000050, 2));
/// assert_eq!(output, "Enter Base Salary: ₹".as_bytes());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn prompt_amount(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> PayrollResult<Decimal> {
    let reply = prompt_reply(input, output, prompt)?;
    let trimmed = reply.trim();
    Decimal::from_str(trimmed).map_err(|_| PayrollError::InvalidAmount {
        input: trimmed.to_string(),
    })
}
