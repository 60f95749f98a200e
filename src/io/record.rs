//! JSON record format for persisted accounts
//!
//! This module centralizes all record format concerns, providing:
//! - AccountRecord structure for (de)serialization
//! - Conversion between records and accounts, dispatching on the `type` field
//! - Text encoding with the 4-space indented layout used on disk
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Record Layout
//!
//! ```json
//! {
//!     "type": "SavingsAccount",
//!     "account_number": "S1",
//!     "name": "Bob",
//!     "balance": 200,
//!     "interest_rate": 0.05
//! }
//! ```
//!
//! `interest_rate` is only written for savings accounts. Amounts are JSON
//! numbers written with every digit of the in-memory decimal, so a saved
//! account reloads with exactly the same balance and rate.

use crate::types::{Account, AccountKind, BankError, DEFAULT_INTEREST_RATE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::warn;

/// Discriminator written for plain accounts
pub const BANK_ACCOUNT_TYPE: &str = "BankAccount";

/// Discriminator written for savings accounts
pub const SAVINGS_ACCOUNT_TYPE: &str = "SavingsAccount";

/// Persisted representation of one account
///
/// The discriminator is kept as a raw JSON value so that records with a
/// missing, unknown or non-string `type` still load (as plain accounts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<Value>,

    pub account_number: String,

    pub name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub interest_rate: Option<Decimal>,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        let (account_type, interest_rate) = match account.kind() {
            AccountKind::Bank => (BANK_ACCOUNT_TYPE, None),
            AccountKind::Savings { interest_rate } => (SAVINGS_ACCOUNT_TYPE, Some(interest_rate)),
        };

        AccountRecord {
            account_type: Some(Value::String(account_type.to_string())),
            account_number: account.id().to_string(),
            name: account.holder_name().to_string(),
            balance: account.balance(),
            interest_rate,
        }
    }
}

impl AccountRecord {
    /// The discriminator, if present and a string
    pub fn type_tag(&self) -> Option<&str> {
        self.account_type.as_ref().and_then(Value::as_str)
    }

    /// Rebuild the account this record describes
    ///
    /// `key` is the id the record was stored under and is only used for error
    /// context and diagnostics; the stored `account_number` is authoritative.
    ///
    /// Dispatch on the discriminator:
    /// - `"SavingsAccount"` builds a savings account, using the stored rate or
    ///   5% when the record has none
    /// - anything else, including a missing discriminator, builds a plain account
    ///
    /// # Errors
    ///
    /// Returns `CorruptRecord` if the stored values break an account invariant
    /// (negative balance or rate, unusable account number).
    pub fn into_account(self, key: &str) -> Result<Account, BankError> {
        if self.account_number != key {
            warn!(
                key,
                account_number = %self.account_number,
                "Record account number differs from its storage key"
            );
        }

        let tag = self.type_tag().map(str::to_owned);
        let account = match tag.as_deref() {
            Some(SAVINGS_ACCOUNT_TYPE) => {
                let interest_rate = self.interest_rate.unwrap_or_else(|| {
                    warn!(key, "Savings record has no interest rate, using default");
                    DEFAULT_INTEREST_RATE
                });
                Account::new_savings(self.account_number, self.name, self.balance, interest_rate)
            }
            Some(BANK_ACCOUNT_TYPE) => Account::new(self.account_number, self.name, self.balance),
            other => {
                warn!(
                    key,
                    discriminator = ?other,
                    "Unknown account type, loading as a plain account"
                );
                Account::new(self.account_number, self.name, self.balance)
            }
        };

        account.map_err(|e| BankError::corrupt_record(key, e.to_string()))
    }
}

/// Encode an account as record text
///
/// # Errors
///
/// Returns `CorruptRecord` if serialization fails.
pub fn encode(account: &Account) -> Result<String, BankError> {
    let record = AccountRecord::from(account);

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    record
        .serialize(&mut serializer)
        .map_err(|e| BankError::corrupt_record(account.id(), e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| BankError::corrupt_record(account.id(), e.to_string()))
}

/// Decode record text stored under `key` into an account
///
/// # Errors
///
/// Returns `CorruptRecord` if the text is not a valid record.
pub fn decode(key: &str, text: &str) -> Result<Account, BankError> {
    let record: AccountRecord =
        serde_json::from_str(text).map_err(|e| BankError::corrupt_record(key, e.to_string()))?;
    record.into_account(key)
}
