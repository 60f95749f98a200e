//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account entity shared by both account kinds
//! - `savings`: Savings account capabilities (interest)
//! - `error`: Error types for the bank records system

pub mod account;
pub mod error;
pub mod savings;

pub use account::{
    format_amount, validate_account_id, Account, AccountId, AccountKind, AccountSnapshot,
    CURRENCY_SYMBOL,
};
pub use error::BankError;
pub use savings::{rate_as_percent, InterestQuote, SavingsAccount, DEFAULT_INTEREST_RATE};
