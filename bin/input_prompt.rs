// Console Foundations - Input Prompt
// Section 1, Lesson 2: prompt for a name and an age, then greet.

use anyhow::Result;
use console_foundations::console;
use std::io;

fn main() -> Result<()> {
    let stdin = io::stdin();
    console::greet(stdin.lock(), io::stdout())
}
