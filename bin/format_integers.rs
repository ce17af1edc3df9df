// Console Foundations - Integer Base Formatting
// Section 3, Lesson 2: base, prefix, sign, and case flags for integers.

use anyhow::Result;
use console_foundations::fmt::integers;
use std::io;

fn main() -> Result<()> {
    integers::run(io::stdout())
}
