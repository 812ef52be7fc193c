//! Interactive shells
//!
//! Numbered-menu loops for the two utilities. Both shells are written
//! against `BufRead`/`Write` rather than stdin/stdout directly so they can
//! be driven by unit tests. The shells own all I/O; the ledger and report
//! layers stay pure.

pub mod expenses;
pub mod sales;

use std::io::{BufRead, Write};

use crate::error::TallyResult;
use crate::models::Money;

/// Print `text` as a prompt and read one trimmed line
///
/// Returns `None` on end of input, which the menu loops treat as quit.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> TallyResult<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a positive money amount
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> TallyResult<Option<Money>> {
    loop {
        let Some(entered) = prompt(input, output, text)? else {
            return Ok(None);
        };

        match Money::parse(&entered) {
            Ok(amount) if amount.is_positive() => return Ok(Some(amount)),
            Ok(_) => writeln!(output, "Amount must be greater than 0.")?,
            Err(_) => writeln!(output, "Please enter a valid amount, e.g. 12.50.")?,
        }
    }
}

/// Prompt until the user enters a non-empty value
fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> TallyResult<Option<String>> {
    loop {
        let Some(entered) = prompt(input, output, text)? else {
            return Ok(None);
        };
        if !entered.is_empty() {
            return Ok(Some(entered));
        }
        writeln!(output, "A value is required.")?;
    }
}

/// Prompt for a date string; empty input falls back to today
///
/// Any other input is accepted as-is: a malformed date degrades to the
/// unknown bucket instead of rejecting the record.
fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> TallyResult<Option<String>> {
    let Some(entered) = prompt(input, output, "Date (YYYY-MM-DD, empty for today): ")? else {
        return Ok(None);
    };

    if entered.is_empty() {
        Ok(Some(chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()))
    } else {
        Ok(Some(entered))
    }
}

/// Prompt until the user enters a number that fits the target type
///
/// Out-of-range input (e.g. a quantity past `u32::MAX`) re-prompts like any
/// other invalid entry instead of wrapping.
fn prompt_number<T, R, W>(input: &mut R, output: &mut W, text: &str) -> TallyResult<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(entered) = prompt(input, output, text)? else {
            return Ok(None);
        };

        match entered.parse::<T>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}
