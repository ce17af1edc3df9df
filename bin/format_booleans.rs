// Console Foundations - Boolean Formatting
// Section 3, Lesson 1: words, digits, and a Display wrapper for bool.

use anyhow::Result;
use console_foundations::fmt::booleans;
use std::io;

fn main() -> Result<()> {
    booleans::run(io::stdout())
}
