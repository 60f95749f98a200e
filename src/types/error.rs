//! Error types for the bank records system
//!
//! This module defines all error types that can occur while creating, mutating,
//! loading or saving an account. Errors are designed to be descriptive and
//! user-friendly, since the interactive menu prints them verbatim.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive amounts, bad account ids, bad rates
//! - **Account Errors**: Insufficient funds, missing account, missing capability
//! - **Persistence Errors**: I/O failures and corrupt records
//! - **Arithmetic Errors**: Overflow in balance or interest calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank records system
///
/// Every variant is recoverable: the caller reports it and decides whether to
/// retry. Account state is never changed by an operation that returns one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Deposit, withdrawal or opening amount is not acceptable
    ///
    /// Deposits and withdrawals require a strictly positive amount. Opening
    /// balances may be zero but never negative.
    #[error("Invalid {operation} amount {amount}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account id
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No record exists for the account id
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The id that was looked up
        account: String,
    },

    /// Interest was requested for an account that is not a savings account
    #[error("Account {account} is not a savings account")]
    NotASavingsAccount {
        /// Account id
        account: String,
    },

    /// Text entered at a prompt could not be parsed as an amount
    ///
    /// Only produced by the interactive menu.
    #[error("Malformed input '{input}': expected a numeric amount")]
    MalformedInput {
        /// The raw text entered by the user
        input: String,
    },

    /// Account id cannot be used as a storage key
    #[error("Invalid account id '{account}': {reason}")]
    InvalidAccountId {
        /// The rejected id
        account: String,
        /// Why it was rejected
        reason: String,
    },

    /// Interest rate is negative
    #[error("Invalid interest rate {rate}: rate must not be negative")]
    InvalidInterestRate {
        /// The rejected rate
        rate: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and the balance is left untouched.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        account: String,
    },

    /// A stored record exists but cannot be turned back into an account
    #[error("Corrupt record for account {account}: {message}")]
    CorruptRecord {
        /// Account id the record was stored under
        account: String,
        /// Description of the decoding problem
        message: String,
    },

    /// I/O error while reading or writing a record
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        BankError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a NotASavingsAccount error
    pub fn not_a_savings_account(account: &str) -> Self {
        BankError::NotASavingsAccount {
            account: account.to_string(),
        }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(input: &str) -> Self {
        BankError::MalformedInput {
            input: input.to_string(),
        }
    }

    /// Create an InvalidAccountId error
    pub fn invalid_account_id(account: &str, reason: &str) -> Self {
        BankError::InvalidAccountId {
            account: account.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create a CorruptRecord error
    pub fn corrupt_record(account: &str, message: impl Into<String>) -> Self {
        BankError::CorruptRecord {
            account: account.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        BankError::InvalidAmount { operation: "deposit".to_string(), amount: Decimal::new(-500, 2) },
        "Invalid deposit amount -5.00: amount must be positive"
    )]
    #[case::insufficient_funds(
        BankError::InsufficientFunds { account: "A1".to_string(), balance: Decimal::new(10000, 2), requested: Decimal::new(100000, 2) },
        "Insufficient funds in account A1: balance 100.00, requested 1000.00"
    )]
    #[case::account_not_found(
        BankError::AccountNotFound { account: "missing".to_string() },
        "Account missing not found"
    )]
    #[case::not_a_savings_account(
        BankError::NotASavingsAccount { account: "A1".to_string() },
        "Account A1 is not a savings account"
    )]
    #[case::malformed_input(
        BankError::MalformedInput { input: "ten".to_string() },
        "Malformed input 'ten': expected a numeric amount"
    )]
    #[case::invalid_account_id(
        BankError::InvalidAccountId { account: "../x".to_string(), reason: "must not contain '..'".to_string() },
        "Invalid account id '../x': must not contain '..'"
    )]
    #[case::invalid_interest_rate(
        BankError::InvalidInterestRate { rate: Decimal::new(-5, 2) },
        "Invalid interest rate -0.05: rate must not be negative"
    )]
    #[case::arithmetic_overflow(
        BankError::ArithmeticOverflow { operation: "deposit".to_string(), account: "A1".to_string() },
        "Arithmetic overflow in deposit for account A1"
    )]
    #[case::corrupt_record(
        BankError::CorruptRecord { account: "A1".to_string(), message: "missing field `balance`".to_string() },
        "Corrupt record for account A1: missing field `balance`"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        BankError::invalid_amount("withdrawal", Decimal::ZERO),
        BankError::InvalidAmount { operation: "withdrawal".to_string(), amount: Decimal::ZERO }
    )]
    #[case::insufficient_funds(
        BankError::insufficient_funds("A1", Decimal::ONE, Decimal::TEN),
        BankError::InsufficientFunds { account: "A1".to_string(), balance: Decimal::ONE, requested: Decimal::TEN }
    )]
    #[case::account_not_found(
        BankError::account_not_found("A1"),
        BankError::AccountNotFound { account: "A1".to_string() }
    )]
    #[case::not_a_savings_account(
        BankError::not_a_savings_account("A1"),
        BankError::NotASavingsAccount { account: "A1".to_string() }
    )]
    #[case::corrupt_record(
        BankError::corrupt_record("A1", "bad"),
        BankError::CorruptRecord { account: "A1".to_string(), message: "bad".to_string() }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
