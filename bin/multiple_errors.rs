// Console Foundations - Multiple Failure Payloads
// Section 2, Lesson 4: unrelated payload shapes discriminated in one match.

use anyhow::Result;
use console_foundations::errors::multi;
use std::io;

fn main() -> Result<()> {
    multi::run(io::stdout(), io::stderr())
}
