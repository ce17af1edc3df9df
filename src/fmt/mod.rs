// 🎨 Formatting - Section 3
// Two lessons on std::fmt: how bool renders, and how integer bases, prefixes,
// signs, and case are all flags on the individual format call.

pub mod booleans;
pub mod integers;

pub use booleans::AsBit;
pub use integers::Base;
