// 🧯 Error Handling - Section 2
// Five lessons, in the order the ideas build on each other: an error value
// handled in place, an error returned across a call boundary, a custom error
// type, failure payloads of unrelated shapes, and a trait-object hierarchy
// caught through the boxed handle.

pub mod basics;
pub mod from_function;
pub mod custom;
pub mod multi;
pub mod account;

pub use account::{Account, CheckingAccount, IllegalBalanceError};
pub use custom::MpgError;
pub use multi::CalcError;
