// Console Foundations - Account Errors
// Section 2, Lesson 5: a trait-object hierarchy caught via the boxed handle.

use anyhow::Result;
use console_foundations::errors::account;
use std::io;

fn main() -> Result<()> {
    account::run(io::stdout(), io::stderr())
}
