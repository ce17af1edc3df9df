// Console Foundations - Custom Error Types
// Section 2, Lesson 3: an error enum with its own Display, matched per variant.

use anyhow::Result;
use console_foundations::errors::custom;
use std::io;

fn main() -> Result<()> {
    let stdin = io::stdin();
    custom::run(stdin.lock(), io::stdout(), io::stderr())
}
