// Console Foundations - Errors From Functions
// Section 2, Lesson 2: return an error across a call boundary.

use anyhow::Result;
use console_foundations::errors::from_function;
use std::io;

fn main() -> Result<()> {
    from_function::run(io::stdout())
}
