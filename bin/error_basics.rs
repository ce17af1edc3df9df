// Console Foundations - Error Basics
// Section 2, Lesson 1: build an error value and handle it in place.

use anyhow::Result;
use console_foundations::errors::basics;
use std::io;

fn main() -> Result<()> {
    let stdin = io::stdin();
    basics::run(stdin.lock(), io::stdout())
}
