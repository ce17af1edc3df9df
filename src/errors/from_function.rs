// 📤 Errors From Functions - Section 2, Lesson 2
// The fallible step moves into a helper. The helper reports, the caller
// decides; neither prints inside the computation.

use anyhow::Result;
use std::io::Write;

/// Miles per gallon, or the offending gallon count as the error value.
pub fn calculate_mpg(miles: i32, gallons: i32) -> Result<f64, i32> {
    if gallons == 0 {
        return Err(gallons);
    }
    Ok(f64::from(miles) / f64::from(gallons))
}

/// Run the lesson with the fixed inputs: 100 miles on 0 gallons.
pub fn run(mut out: impl Write) -> Result<()> {
    match calculate_mpg(100, 0) {
        Ok(mpg) => writeln!(out, "Result: {}", mpg)?,
        Err(code) => writeln!(out, "Exception is caught: {}", code)?,
    }
    Ok(())
}
