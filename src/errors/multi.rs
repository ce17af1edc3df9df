// 🧺 Multiple Failure Payloads - Section 2, Lesson 4
// Variants are free to carry data of unrelated types - a number here, a
// ready-made message there. One match still handles every case.

use anyhow::Result;
use std::io::Write;

/// Failures with payloads of two different shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Carries the offending gallon count.
    DivideByZero(i32),
    /// Carries a ready-to-print message.
    Negative(String),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::DivideByZero(gallons) => {
                write!(f, "division by zero ({} gallons)", gallons)
            }
            CalcError::Negative(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CalcError {}

/// Miles per gallon, refusing a zero divisor and negative inputs.
pub fn calculate_mpg(miles: i32, gallons: i32) -> Result<f64, CalcError> {
    if gallons == 0 {
        return Err(CalcError::DivideByZero(gallons));
    }
    if miles < 0 || gallons < 0 {
        return Err(CalcError::Negative(String::from("Negative Value Error")));
    }
    Ok(f64::from(miles) / f64::from(gallons))
}

/// Run the lesson with the fixed inputs: 10 miles on 0 gallons.
pub fn run(mut out: impl Write, mut err: impl Write) -> Result<()> {
    match calculate_mpg(10, 0) {
        Ok(mpg) => writeln!(out, "Result: {}", mpg)?,
        Err(CalcError::DivideByZero(_)) => writeln!(err, "You can't divide by 0")?,
        Err(CalcError::Negative(message)) => writeln!(err, "{}", message)?,
    }
    Ok(())
}
