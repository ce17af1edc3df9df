// Console Foundations - Lesson Index
// No argument: print the catalogue. One argument: run that lesson on the
// real standard streams.

use anyhow::{anyhow, Result};
use std::env;
use std::io::{self, Write};

// Use library instead of local modules
use console_foundations::{console, errors, fmt, VERSION};

/// The catalogue, grouped the way the workbook teaches them.
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Section 1: Console I/O",
        &[
            ("hello-world", "Print a line to standard output"),
            ("input-prompt", "Read a name and an age, then greet"),
        ],
    ),
    (
        "Section 2: Error handling",
        &[
            ("error-basics", "Build an error value and handle it in place"),
            ("error-from-function", "Return an error across a call boundary"),
            ("custom-errors", "Define an error enum with its own Display"),
            ("multiple-errors", "Failure payloads of unrelated shapes, one match"),
            ("account-errors", "Catch a trait-object hierarchy via the boxed handle"),
        ],
    ),
    (
        "Section 3: Formatting",
        &[
            ("format-booleans", "Words, digits, and a Display wrapper for bool"),
            ("format-integers", "Base, prefix, sign, and case flags for integers"),
        ],
    ),
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some(name) => run_lesson(name),
        None => print_catalogue(),
    }
}

/// Run one lesson by its binary name, wired to the process streams.
fn run_lesson(name: &str) -> Result<()> {
    let stdin = io::stdin();
    let out = io::stdout();
    let err = io::stderr();

    match name {
        "hello-world" => console::hello(out),
        "input-prompt" => console::greet(stdin.lock(), out),
        "error-basics" => errors::basics::run(stdin.lock(), out),
        "error-from-function" => errors::from_function::run(out),
        "custom-errors" => errors::custom::run(stdin.lock(), out, err),
        "multiple-errors" => errors::multi::run(out, err),
        "account-errors" => errors::account::run(out, err),
        "format-booleans" => fmt::booleans::run(out),
        "format-integers" => fmt::integers::run(out),
        other => Err(anyhow!(
            "unknown lesson: {} (run with no arguments to list them)",
            other
        )),
    }
}

/// Print the banner and the full lesson catalogue.
fn print_catalogue() -> Result<()> {
    let mut out = io::stdout();

    writeln!(out, "📚 Console Foundations v{} - a Rust workbook", VERSION)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;

    for (section, lessons) in SECTIONS {
        writeln!(out)?;
        writeln!(out, "{}", section)?;
        for (name, blurb) in lessons {
            writeln!(out, "  {:<20} {}", name, blurb)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Run a lesson with: cargo run -- <name>")?;
    writeln!(out, "Each lesson is also its own binary: cargo run --bin <name>")?;

    Ok(())
}
