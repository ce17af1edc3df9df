// 💳 Account Errors - Section 2, Lesson 5
// The capstone: a small account hierarchy behind a trait object, a
// constructor that can refuse, and a handler that catches through the boxed
// error handle - recovering the concrete type by downcast when it needs to.

use anyhow::Result;
use std::io::Write;

// ============================================================================
// ILLEGAL BALANCE ERROR
// ============================================================================

/// An opening balance the bank refuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IllegalBalanceError {
    /// The balance that was refused.
    pub balance: f64,
}

impl std::fmt::Display for IllegalBalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illegal balance: {}", self.balance)
    }
}

impl std::error::Error for IllegalBalanceError {}

// ============================================================================
// ACCOUNT HIERARCHY
// ============================================================================

/// What every concrete account kind can answer.
///
/// `summary` is a provided method: each implementor gets the same one-line
/// report for free and only supplies the three facts it is built from.
pub trait Account: std::fmt::Debug {
    /// Owner's display name.
    fn owner(&self) -> &str;

    /// Current balance.
    fn balance(&self) -> f64;

    /// Kind label used in summaries.
    fn kind(&self) -> &'static str;

    /// One-line report, identical in shape for every account kind.
    fn summary(&self) -> String {
        format!("{}: {}, ${}", self.kind(), self.owner(), self.balance())
    }
}

/// The one concrete account this lesson needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckingAccount {
    owner: String,
    balance: f64,
}

impl CheckingAccount {
    /// Open an account. A negative opening balance is refused with the
    /// amount that was offered.
    pub fn open(owner: &str, balance: f64) -> Result<CheckingAccount, IllegalBalanceError> {
        if balance < 0.0 {
            return Err(IllegalBalanceError { balance });
        }
        Ok(CheckingAccount {
            owner: owner.to_string(),
            balance,
        })
    }
}

impl Account for CheckingAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "Checking_Account"
    }
}

/// Factory: open a checking account behind the trait object.
///
/// The `?` widens the concrete `IllegalBalanceError` into the caller's boxed
/// handle - the same move a catch-by-base-reference performs, so the caller
/// can hold "some account error" without naming the concrete type.
pub fn open_account(owner: &str, balance: f64) -> Result<Box<dyn Account>> {
    let account = CheckingAccount::open(owner, balance)?;
    Ok(Box::new(account))
}

// ============================================================================
// LESSON RUNNER
// ============================================================================

/// Run the lesson with the fixed inputs: owner "Moe", balance -10.0.
///
/// The error arm first tries the concrete type it knows how to talk about;
/// anything else falls through to the unknown-error report. Either way the
/// lesson finishes normally.
pub fn run(mut out: impl Write, mut err: impl Write) -> Result<()> {
    match open_account("Moe", -10.0) {
        Ok(account) => writeln!(out, "{}", account.summary())?,
        Err(error) => match error.downcast_ref::<IllegalBalanceError>() {
            Some(illegal) => writeln!(err, "An unexpected error occurred: {}", illegal)?,
            None => writeln!(err, "An unknown error occurred.")?,
        },
    }

    writeln!(out, "Program completed successfully")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_refuses_a_negative_balance() {
        let error = CheckingAccount::open("Moe", -10.0).unwrap_err();
        assert_eq!(error, IllegalBalanceError { balance: -10.0 });
        assert_eq!(error.to_string(), "illegal balance: -10");
    }

    #[test]
    fn test_open_accepts_zero_and_positive_balances() {
        assert!(CheckingAccount::open("Moe", 0.0).is_ok());
        assert!(CheckingAccount::open("Moe", 100.0).is_ok());
    }

    #[test]
    fn test_summary_reports_kind_owner_and_balance() {
        let account = CheckingAccount::open("Moe", 100.0).unwrap();
        assert_eq!(account.summary(), "Checking_Account: Moe, $100");
    }

    #[test]
    fn test_factory_hands_back_a_trait_object() {
        let account = open_account("Moe", 100.0).unwrap();
        assert_eq!(account.owner(), "Moe");
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.summary(), "Checking_Account: Moe, $100");
    }

    #[test]
    fn test_factory_error_downcasts_to_the_concrete_type() {
        let error = open_account("Moe", -10.0).unwrap_err();

        let illegal = error
            .downcast_ref::<IllegalBalanceError>()
            .expect("the boxed handle still knows the concrete type");
        assert_eq!(illegal.balance, -10.0);
    }

    #[test]
    fn test_run_reports_the_illegal_balance_and_completes() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(err).unwrap(),
            "An unexpected error occurred: illegal balance: -10\n"
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Program completed successfully\n"
        );
    }
}
