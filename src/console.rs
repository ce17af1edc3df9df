// 🖥️ Console I/O - Section 1
// Two warm-up lessons: write to stdout, then prompt and read from stdin.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

// ============================================================================
// LESSON 1: HELLO WORLD
// ============================================================================

/// Print the classic greeting.
///
/// `writeln!` is available everywhere without an import; the `Write` trait
/// it writes through comes in with one `use std::io::Write`. The crate root
/// re-exports every lesson's types the same way, so a single `use` covers
/// the whole workbook.
pub fn hello(mut out: impl Write) -> Result<()> {
    writeln!(out, "Hello, World!")?;
    Ok(())
}

// ============================================================================
// LESSON 2: INPUT PROMPT
// ============================================================================

/// Prompt for a name and an age, then greet.
///
/// Prompts carry no trailing newline, so the output stream must be flushed
/// before blocking on input. `read_line` keeps the newline it read; the
/// helper below strips it, and only it - inner spaces in a name survive.
pub fn greet(mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    write!(out, "Please enter your name: ")?;
    out.flush()?;
    let name = next_line(&mut input).context("reading the name")?;

    write!(out, "Please enter your age: ")?;
    out.flush()?;
    let age: u32 = next_line(&mut input)
        .context("reading the age")?
        .trim()
        .parse()
        .context("the age must be a whole number")?;

    writeln!(out, "Hello, {}! You are {} years old.", name, age)?;
    Ok(())
}

/// Read one full line, without its line ending. End of input is an error
/// here: these lessons always expect their answer.
fn next_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

// ============================================================================
// TESTS
// ============================================================================
