// 🏷️ Custom Error Types - Section 2, Lesson 3
// One enum for everything this computation can refuse, a hand-written
// Display for the messages, and a match arm per variant at the call site.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Everything that can go wrong when computing miles per gallon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpgError {
    /// The gallon count was zero.
    DivideByZero,
    /// Miles or gallons was negative.
    NegativeValue,
}

impl std::fmt::Display for MpgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MpgError::DivideByZero => write!(f, "division by zero"),
            MpgError::NegativeValue => write!(f, "negative value"),
        }
    }
}

impl std::error::Error for MpgError {}

// ============================================================================
// COMPUTATION
// ============================================================================

/// Miles per gallon. The zero check runs first: (-5, 0) is a zero-divisor
/// problem, not a sign problem.
pub fn calculate_mpg(miles: i32, gallons: i32) -> Result<f64, MpgError> {
    if gallons == 0 {
        return Err(MpgError::DivideByZero);
    }
    if miles < 0 || gallons < 0 {
        return Err(MpgError::NegativeValue);
    }
    Ok(f64::from(miles) / f64::from(gallons))
}

// ============================================================================
// LESSON RUNNER
// ============================================================================

/// Prompt for the two inputs; results go to stdout, diagnostics to stderr.
pub fn run(mut input: impl BufRead, mut out: impl Write, mut err: impl Write) -> Result<()> {
    write!(out, "Enter the miles driven: ")?;
    out.flush()?;
    let miles = read_int(&mut input).context("reading the miles")?;

    write!(out, "Enter the gallons used: ")?;
    out.flush()?;
    let gallons = read_int(&mut input).context("reading the gallons")?;

    match calculate_mpg(miles, gallons) {
        Ok(mpg) => writeln!(out, "Result: {}", mpg)?,
        Err(MpgError::DivideByZero) => writeln!(err, "No Divide By 0")?,
        Err(MpgError::NegativeValue) => writeln!(err, "No Negative Values")?,
    }
    Ok(())
}

fn read_int(input: &mut impl BufRead) -> Result<i32> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    line.trim().parse().context("the input must be a whole number")
}

// ============================================================================
// TESTS
// ============================================================================
