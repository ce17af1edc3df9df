//! # Console Foundations
//!
//! A workbook of nine self-contained lessons on the things every console
//! program does: writing and reading the standard streams, handling failures
//! as values (where other languages reach for exceptions), and choosing
//! output renderings with `std::fmt`.
//!
//! Each lesson is one library module plus one thin binary, so its exact
//! console output is unit-testable. Lessons share nothing with each other;
//! every module stands alone, and small helpers are repeated on purpose.
//!
//! Run the catalogue with `cargo run`, and a single lesson with
//! `cargo run -- input-prompt` (or directly: `cargo run --bin input-prompt`).

pub mod console; // Section 1: console input/output
pub mod errors;  // Section 2: error handling
pub mod fmt;     // Section 3: formatting

// Re-export commonly used types
pub use console::{greet, hello};
pub use errors::{Account, CalcError, CheckingAccount, IllegalBalanceError, MpgError};
pub use fmt::{AsBit, Base};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
