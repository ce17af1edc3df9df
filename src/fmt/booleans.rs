// 🎨 Boolean Formatting - Section 3, Lesson 1
// `bool` displays as words out of the box. Digits are an explicit choice:
// either convert the value, or wrap it in a type with its own Display.
// There is no stream state to toggle - each call picks its own rendering.

use anyhow::Result;
use std::io::Write;

/// Renders a bool as `1` or `0`.
///
/// A wrapper with a Display impl is the closest thing Rust has to an output
/// manipulator: the value is untouched, only its rendering changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsBit(pub bool);

impl std::fmt::Display for AsBit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(self.0))
    }
}

/// Walk two comparisons through the word and digit renderings.
pub fn run(mut out: impl Write) -> Result<()> {
    writeln!(out, "Default words (10 == 10): {}", 10 == 10)?;
    writeln!(out, "Default words (10 == 20): {}", 10 == 20)?;
    writeln!(out)?;

    writeln!(out, "Converted with u8::from (10 == 10): {}", u8::from(10 == 10))?;
    writeln!(out, "Converted with u8::from (10 == 20): {}", u8::from(10 == 20))?;
    writeln!(out)?;

    writeln!(out, "Wrapped in AsBit (10 == 10): {}", AsBit(10 == 10))?;
    writeln!(out, "Wrapped in AsBit (10 == 20): {}", AsBit(10 == 20))?;
    writeln!(out)?;

    // Nothing to reset: the next plain {} is words again
    writeln!(out, "Plain again (10 == 10): {}", 10 == 10)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_as_bit_renders_digits() {
        assert_eq!(AsBit(true).to_string(), "1");
        assert_eq!(AsBit(false).to_string(), "0");
    }

    #[test]
    fn test_run_walks_through_every_rendering() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Default words (10 == 10): true\n\
             Default words (10 == 20): false\n\
             \n\
             Converted with u8::from (10 == 10): 1\n\
             Converted with u8::from (10 == 20): 0\n\
             \n\
             Wrapped in AsBit (10 == 10): 1\n\
             Wrapped in AsBit (10 == 20): 0\n\
             \n\
             Plain again (10 == 10): true\n"
        );
    }
}
