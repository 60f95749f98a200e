//! Account-related types for the bank records system
//!
//! This module defines the Account entity shared by both account kinds, the
//! read-only snapshot used for display, and the id and amount helpers the rest
//! of the crate relies on.

use super::error::BankError;
use super::savings::SavingsAccount;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Account identifier, also used as the storage key
pub type AccountId = String;

/// Currency symbol used when printing amounts
pub const CURRENCY_SYMBOL: &str = "₹";

/// The kind of an account
///
/// A savings account is a plain account plus a fixed interest rate; the rest
/// of the state lives on [`Account`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain bank account
    Bank,

    /// Savings account with an annual interest rate (decimal fraction, 0.05 = 5%)
    Savings {
        /// Fixed at creation
        interest_rate: Decimal,
    },
}

impl AccountKind {
    /// Human-readable name of the kind
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Bank => "Bank",
            AccountKind::Savings { .. } => "Savings",
        }
    }
}

/// A single customer account
///
/// Identity and holder name are fixed at construction. The balance is private
/// and only changes through [`Account::deposit`] and [`Account::withdraw`],
/// which keep it non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    /// Create a plain bank account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is not a valid storage key
    /// - The opening balance is negative
    pub fn new(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, BankError> {
        Self::with_kind(id.into(), holder_name.into(), balance, AccountKind::Bank)
    }

    /// Create a savings account with the given interest rate
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is not a valid storage key
    /// - The opening balance is negative
    /// - The interest rate is negative
    pub fn new_savings(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, BankError> {
        Self::with_kind(
            id.into(),
            holder_name.into(),
            balance,
            AccountKind::Savings { interest_rate },
        )
    }

    fn with_kind(
        id: AccountId,
        holder_name: String,
        balance: Decimal,
        kind: AccountKind,
    ) -> Result<Self, BankError> {
        validate_account_id(&id)?;

        if balance < Decimal::ZERO {
            return Err(BankError::invalid_amount("opening", balance));
        }

        if let AccountKind::Savings { interest_rate } = kind {
            if interest_rate < Decimal::ZERO {
                return Err(BankError::InvalidInterestRate {
                    rate: interest_rate,
                });
            }
        }

        Ok(Account {
            id,
            holder_name,
            balance,
            kind,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Current balance; the only way to read it
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Interest rate for savings accounts, `None` for plain accounts
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Bank => None,
        }
    }

    pub fn is_savings(&self) -> bool {
        matches!(self.kind, AccountKind::Savings { .. })
    }

    /// View this account through its savings capabilities
    ///
    /// Returns `None` for plain accounts, which have no interest computation.
    pub fn as_savings(&self) -> Option<SavingsAccount<'_>> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(SavingsAccount::new(self, interest_rate)),
            AccountKind::Bank => None,
        }
    }

    /// Deposit funds into the account
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be strictly positive)
    ///
    /// # Returns
    ///
    /// The balance after the deposit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount to the balance would overflow
    ///
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", &self.id))?;

        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Withdraw funds from the account
    ///
    /// The amount is validated before the balance is checked, so a negative
    /// amount is always reported as `InvalidAmount`.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be strictly positive)
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    ///
    /// The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount("withdrawal", amount));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_funds(&self.id, self.balance, amount));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", &self.id))?;

        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Read-only snapshot of the account for display
    pub fn describe(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id.clone(),
            holder_name: self.holder_name.clone(),
            kind: self.kind,
            balance: self.balance,
        }
    }
}

/// Point-in-time view of an account
///
/// The `Display` impl renders the account details block shown by the
/// balance enquiry, with the balance to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub holder_name: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Account Details =====")?;
        writeln!(f, "Account Number: {}", self.id)?;
        writeln!(f, "Account Holder: {}", self.holder_name)?;
        writeln!(f, "Account Type: {}", self.kind.label())?;
        writeln!(
            f,
            "Current Balance: {}{}",
            CURRENCY_SYMBOL,
            format_amount(self.balance)
        )?;
        write!(f, "===========================")
    }
}

/// Format an amount with exactly two decimal places, rounding half away from zero
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Check that an id can be used as a storage key
///
/// Ids become file names, so they must be non-empty, free of path
/// separators and control characters, and must not contain `..`.
pub fn validate_account_id(id: &str) -> Result<(), BankError> {
    if id.trim().is_empty() {
        return Err(BankError::invalid_account_id(id, "must not be empty"));
    }
    if id.contains(['/', '\\']) {
        return Err(BankError::invalid_account_id(
            id,
            "must not contain path separators",
        ));
    }
    if id.contains("..") {
        return Err(BankError::invalid_account_id(id, "must not contain '..'"));
    }
    if id.chars().any(char::is_control) {
        return Err(BankError::invalid_account_id(
            id,
            "must not contain control characters",
        ));
    }
    Ok(())
}
