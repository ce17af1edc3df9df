// 🎨 Integer Base Formatting - Section 3, Lesson 2
// One value, many renderings. Base, literal prefix, forced sign, and case
// are all flags on the individual format call, so there is nothing to set
// beforehand and nothing to reset afterwards.

use anyhow::Result;
use std::io::Write;

/// The numeric bases `std::fmt` renders directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
}

impl Base {
    /// All four bases, in display order.
    pub const ALL: [Base; 4] = [Base::Decimal, Base::Hexadecimal, Base::Octal, Base::Binary];

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
            Base::Octal => "octal",
            Base::Binary => "binary",
        }
    }

    /// Render a value in this base, digits only.
    pub fn render(&self, value: i32) -> String {
        match self {
            Base::Decimal => format!("{}", value),
            Base::Hexadecimal => format!("{:x}", value),
            Base::Octal => format!("{:o}", value),
            Base::Binary => format!("{:b}", value),
        }
    }

    /// Render a value with the base's literal prefix (the `#` flag). Decimal
    /// has no prefix in Rust source, so it renders unadorned.
    pub fn render_prefixed(&self, value: i32) -> String {
        match self {
            Base::Decimal => format!("{}", value),
            Base::Hexadecimal => format!("{:#x}", value),
            Base::Octal => format!("{:#o}", value),
            Base::Binary => format!("{:#b}", value),
        }
    }
}

/// Walk 255 through every base, then the prefix, sign, and case flags.
pub fn run(mut out: impl Write) -> Result<()> {
    let num = 255;

    writeln!(out, "Default (decimal): {}", num)?;
    writeln!(out)?;

    for base in Base::ALL {
        writeln!(out, "{} ({})", base.render(num), base.name())?;
    }
    writeln!(out)?;

    writeln!(out, "With base prefixes:")?;
    for base in Base::ALL {
        writeln!(out, "{} ({})", base.render_prefixed(num), base.name())?;
    }
    writeln!(out)?;

    writeln!(out, "With a forced sign: {:+}", num)?;
    writeln!(out, "Uppercase hexadecimal: {:#X}", num)?;
    writeln!(out)?;

    // Flags belong to the call, so "resetting" is just a plain {} again
    writeln!(out, "Back to default: {}", num)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_every_base() {
        assert_eq!(Base::Decimal.render(255), "255");
        assert_eq!(Base::Hexadecimal.render(255), "ff");
        assert_eq!(Base::Octal.render(255), "377");
        assert_eq!(Base::Binary.render(255), "11111111");
    }

    #[test]
    fn test_render_prefixed_every_base() {
        assert_eq!(Base::Decimal.render_prefixed(255), "255");
        assert_eq!(Base::Hexadecimal.render_prefixed(255), "0xff");
        assert_eq!(Base::Octal.render_prefixed(255), "0o377");
        assert_eq!(Base::Binary.render_prefixed(255), "0b11111111");
    }

    #[test]
    fn test_base_names() {
        let names: Vec<&str> = Base::ALL.iter().map(Base::name).collect();
        assert_eq!(names, ["decimal", "hexadecimal", "octal", "binary"]);
    }

    #[test]
    fn test_run_walks_through_every_flag() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Default (decimal): 255\n\
             \n\
             255 (decimal)\n\
             ff (hexadecimal)\n\
             377 (octal)\n\
             11111111 (binary)\n\
             \n\
             With base prefixes:\n\
             255 (decimal)\n\
             0xff (hexadecimal)\n\
             0o377 (octal)\n\
             0b11111111 (binary)\n\
             \n\
             With a forced sign: +255\n\
             Uppercase hexadecimal: 0xFF\n\
             \n\
             Back to default: 255\n"
        );
    }
}
