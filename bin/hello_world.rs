// Console Foundations - Hello World
// Section 1, Lesson 1: print a line to standard output.

use anyhow::Result;
use console_foundations::console;
use std::io;

fn main() -> Result<()> {
    console::hello(io::stdout())
}
