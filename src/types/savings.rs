//! Savings account capabilities
//!
//! A savings account is an [`Account`] whose kind carries an interest rate.
//! Interest computation is only reachable through [`Account::as_savings`], so
//! plain accounts simply do not offer it.

use super::account::{Account, AccountId};
use super::error::BankError;
use rust_decimal::Decimal;

/// Interest rate given to savings accounts when none is specified (5%)
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Borrowed view of an account known to be a savings account
#[derive(Debug, Clone, Copy)]
pub struct SavingsAccount<'a> {
    account: &'a Account,
    interest_rate: Decimal,
}

impl<'a> SavingsAccount<'a> {
    pub(crate) fn new(account: &'a Account, interest_rate: Decimal) -> Self {
        SavingsAccount {
            account,
            interest_rate,
        }
    }

    /// The underlying account
    pub fn account(&self) -> &'a Account {
        self.account
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Simple annual interest on the current balance
    ///
    /// Pure function of the account state: `balance * interest_rate`. Nothing
    /// is credited to the account.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the product does not fit in a `Decimal`.
    pub fn calculate_interest(&self) -> Result<Decimal, BankError> {
        self.account
            .balance()
            .checked_mul(self.interest_rate)
            .ok_or_else(|| BankError::arithmetic_overflow("interest", self.account.id()))
    }

    /// Interest together with the figures it was computed from
    pub fn quote(&self) -> Result<InterestQuote, BankError> {
        Ok(InterestQuote {
            account: self.account.id().to_string(),
            balance: self.account.balance(),
            rate: self.interest_rate,
            interest: self.calculate_interest()?,
        })
    }
}

/// Result of an interest enquiry
#[derive(Debug, Clone, PartialEq)]
pub struct InterestQuote {
    pub account: AccountId,
    pub balance: Decimal,
    pub rate: Decimal,
    pub interest: Decimal,
}

impl InterestQuote {
    /// The rate as a percentage, see [`rate_as_percent`]
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the rate is too large to scale.
    pub fn rate_percent(&self) -> Result<Decimal, BankError> {
        rate_as_percent(self.rate)
            .ok_or_else(|| BankError::arithmetic_overflow("interest rate", &self.account))
    }
}

/// A rate as a percentage without trailing zeros (0.05 -> 5, 0.055 -> 5.5)
///
/// `None` when `rate * 100` does not fit in a `Decimal`.
pub fn rate_as_percent(rate: Decimal) -> Option<Decimal> {
    rate.checked_mul(Decimal::ONE_HUNDRED).map(|percent| percent.normalize())
}
