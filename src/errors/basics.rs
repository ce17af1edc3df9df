// 🚦 Error Basics - Section 2, Lesson 1
// Build an error value and handle it right where it appears. The error type
// can be anything at all - here it is a bare i32, no trait impls required.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Zero is rejected; every other number passes through unchanged.
pub fn check_nonzero(number: f64) -> Result<f64, i32> {
    if number == 0.0 {
        return Err(0);
    }
    Ok(number)
}

/// Prompt for a number, then print either the value or the caught error.
pub fn run(mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    write!(out, "Enter a number: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("reading the number")?;
    let number: f64 = line.trim().parse().context("the input must be a number")?;

    match check_nonzero(number) {
        Ok(value) => writeln!(out, "Print {}", value)?,
        Err(_code) => writeln!(out, "Exception Caught")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_check_nonzero_rejects_zero() {
        assert_eq!(check_nonzero(0.0), Err(0));
    }

    #[test]
    fn test_check_nonzero_passes_other_numbers_through() {
        assert_eq!(check_nonzero(4.5), Ok(4.5));
        assert_eq!(check_nonzero(-1.0), Ok(-1.0));
    }

    #[test]
    fn test_run_reports_the_caught_error_for_zero() {
        let mut out = Vec::new();
        run(Cursor::new("0\n"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter a number: Exception Caught\n"
        );
    }

    #[test]
    fn test_run_prints_any_other_number() {
        let mut out = Vec::new();
        run(Cursor::new("4.5\n"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter a number: Print 4.5\n"
        );
    }

    #[test]
    fn test_run_rejects_input_that_is_not_a_number() {
        let mut out = Vec::new();
        let error = run(Cursor::new("zero\n"), &mut out).unwrap_err();
        assert_eq!(error.to_string(), "the input must be a number");
    }
}
