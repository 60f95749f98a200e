//! Bank service
//!
//! This module provides the `Bank` that front ends call for every account
//! operation. Each operation loads the account from the store, applies the
//! change, and saves it back. Nothing is cached between operations.
//!
//! The bank enforces:
//! - Unknown ids are reported before any amount is looked at
//! - Failed validations never reach the store (no write happens)
//! - Interest is only offered for savings accounts

use crate::core::traits::AccountStore;
use crate::types::{
    Account, AccountSnapshot, BankError, InterestQuote, DEFAULT_INTEREST_RATE,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Account operations over a keyed store
pub struct Bank<S: AccountStore> {
    store: S,
    /// Rate given to newly created savings accounts
    interest_rate: Decimal,
}

impl<S: AccountStore> Bank<S> {
    /// Create a bank over `store` using the default 5% savings rate
    pub fn new(store: S) -> Self {
        Bank {
            store,
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }

    /// Use `rate` for savings accounts created from now on
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterestRate` if the rate is negative.
    pub fn with_interest_rate(mut self, rate: Decimal) -> Result<Self, BankError> {
        if rate < Decimal::ZERO {
            return Err(BankError::InvalidInterestRate { rate });
        }
        self.interest_rate = rate;
        Ok(self)
    }

    /// Rate given to newly created savings accounts
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create and persist a new account
    ///
    /// An existing record with the same id is replaced.
    ///
    /// # Arguments
    ///
    /// * `id` - Account id, also the storage key
    /// * `holder_name` - Name of the account holder
    /// * `initial_balance` - Opening balance (zero or positive)
    /// * `is_savings` - Create a savings account at the bank's interest rate
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is not a valid storage key
    /// - The opening balance is negative
    /// - The record cannot be written
    pub fn create_account(
        &mut self,
        id: &str,
        holder_name: &str,
        initial_balance: Decimal,
        is_savings: bool,
    ) -> Result<Account, BankError> {
        let account = if is_savings {
            Account::new_savings(id, holder_name, initial_balance, self.interest_rate)?
        } else {
            Account::new(id, holder_name, initial_balance)?
        };

        if self.store.exists(id)? {
            warn!(account = id, "Replacing existing account record");
        }

        self.store.save(&account)?;

        info!(
            account = id,
            kind = account.kind().label(),
            balance = %account.balance(),
            "Account created"
        );
        Ok(account)
    }

    /// Load an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no record exists for the id.
    pub fn account(&self, id: &str) -> Result<Account, BankError> {
        let account = self.store.load(id)?;
        debug!(account = id, kind = account.kind().label(), "Account loaded");
        Ok(account)
    }

    /// Deposit into an account and persist the new balance
    ///
    /// # Returns
    ///
    /// The balance after the deposit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is zero or negative
    /// - The record cannot be written
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, BankError> {
        let mut account = self.account(id)?;
        let balance = account.deposit(amount)?;
        self.store.save(&account)?;

        info!(account = id, amount = %amount, balance = %balance, "Deposit applied");
        Ok(balance)
    }

    /// Withdraw from an account and persist the new balance
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is zero or negative
    /// - The amount exceeds the balance
    /// - The record cannot be written
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, BankError> {
        let mut account = self.account(id)?;
        let balance = account.withdraw(amount)?;
        self.store.save(&account)?;

        info!(account = id, amount = %amount, balance = %balance, "Withdrawal applied");
        Ok(balance)
    }

    /// Snapshot of an account for display
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no record exists for the id.
    pub fn view_balance(&self, id: &str) -> Result<AccountSnapshot, BankError> {
        Ok(self.account(id)?.describe())
    }

    /// Annual interest for a savings account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The account is not a savings account
    pub fn compute_interest(&self, id: &str) -> Result<InterestQuote, BankError> {
        let account = self.account(id)?;
        let savings = account
            .as_savings()
            .ok_or_else(|| BankError::not_a_savings_account(id))?;
        savings.quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStore;
    use crate::types::AccountKind;
    use rstest::{fixture, rstest};

    #[fixture]
    fn bank() -> Bank<MemoryStore> {
        Bank::new(MemoryStore::new())
    }

    #[rstest]
    fn test_create_plain_account_is_persisted(mut bank: Bank<MemoryStore>) {
        let account = bank
            .create_account("A1", "Alice", Decimal::new(100, 0), false)
            .unwrap();

        assert_eq!(account.kind(), AccountKind::Bank);
        assert_eq!(bank.account("A1").unwrap(), account);
    }

    #[rstest]
    fn test_create_savings_account_uses_bank_rate(mut bank: Bank<MemoryStore>) {
        let account = bank
            .create_account("S1", "Bob", Decimal::new(200, 0), true)
            .unwrap();

        assert_eq!(account.interest_rate(), Some(Decimal::new(5, 2)));
    }

    #[test]
    fn test_with_interest_rate_applies_to_new_savings_accounts() {
        let mut bank = Bank::new(MemoryStore::new())
            .with_interest_rate(Decimal::new(7, 2))
            .unwrap();

        bank.create_account("S1", "Bob", Decimal::new(100, 0), true)
            .unwrap();

        assert_eq!(
            bank.account("S1").unwrap().interest_rate(),
            Some(Decimal::new(7, 2))
        );
    }

    #[test]
    fn test_with_interest_rate_rejects_negative_rate() {
        let result = Bank::new(MemoryStore::new()).with_interest_rate(Decimal::new(-1, 2));
        assert!(matches!(
            result.err().unwrap(),
            BankError::InvalidInterestRate { .. }
        ));
    }

    #[rstest]
    fn test_create_rejects_negative_opening_balance(mut bank: Bank<MemoryStore>) {
        let result = bank.create_account("A1", "Alice", Decimal::new(-10, 0), false);

        assert!(matches!(result.unwrap_err(), BankError::InvalidAmount { .. }));
        assert!(bank.store().is_empty());
    }

    #[rstest]
    fn test_create_replaces_existing_record(mut bank: Bank<MemoryStore>) {
        bank.create_account("A1", "Alice", Decimal::new(10, 0), false)
            .unwrap();
        bank.create_account("A1", "Alicia", Decimal::new(20, 0), true)
            .unwrap();

        let account = bank.account("A1").unwrap();
        assert_eq!(account.holder_name(), "Alicia");
        assert!(account.is_savings());
        assert_eq!(bank.store().len(), 1);
    }

    #[rstest]
    fn test_deposit_then_withdraw_scenario(mut bank: Bank<MemoryStore>) {
        bank.create_account("A1", "Alice", Decimal::ZERO, false)
            .unwrap();

        assert_eq!(bank.deposit("A1", Decimal::new(100, 0)).unwrap(), Decimal::new(100, 0));

        let rejected = bank.withdraw("A1", Decimal::new(1000, 0));
        assert_eq!(
            rejected.unwrap_err(),
            BankError::insufficient_funds("A1", Decimal::new(100, 0), Decimal::new(1000, 0))
        );
        assert_eq!(bank.account("A1").unwrap().balance(), Decimal::new(100, 0));

        assert_eq!(bank.withdraw("A1", Decimal::new(50, 0)).unwrap(), Decimal::new(50, 0));
        assert_eq!(bank.account("A1").unwrap().balance(), Decimal::new(50, 0));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1, 0))]
    fn test_invalid_amounts_do_not_touch_record(
        mut bank: Bank<MemoryStore>,
        #[case] amount: Decimal,
    ) {
        bank.create_account("A1", "Alice", Decimal::new(10, 0), false)
            .unwrap();
        let before = bank.store().raw("A1").unwrap().to_string();

        assert!(matches!(
            bank.deposit("A1", amount).unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        assert!(matches!(
            bank.withdraw("A1", amount).unwrap_err(),
            BankError::InvalidAmount { .. }
        ));

        assert_eq!(bank.store().raw("A1").unwrap(), before);
    }

    #[rstest]
    fn test_operations_on_missing_account(mut bank: Bank<MemoryStore>) {
        let not_found = BankError::account_not_found("ghost");

        assert_eq!(bank.deposit("ghost", Decimal::ONE).unwrap_err(), not_found);
        assert_eq!(bank.withdraw("ghost", Decimal::ONE).unwrap_err(), not_found);
        assert_eq!(bank.view_balance("ghost").unwrap_err(), not_found);
        assert_eq!(bank.compute_interest("ghost").unwrap_err(), not_found);
    }

    #[rstest]
    fn test_missing_account_is_reported_before_amount(mut bank: Bank<MemoryStore>) {
        assert_eq!(
            bank.deposit("ghost", Decimal::new(-1, 0)).unwrap_err(),
            BankError::account_not_found("ghost")
        );
    }

    #[rstest]
    fn test_view_balance(mut bank: Bank<MemoryStore>) {
        bank.create_account("A1", "Alice", Decimal::new(7525, 2), false)
            .unwrap();

        let snapshot = bank.view_balance("A1").unwrap();

        assert_eq!(snapshot.holder_name, "Alice");
        assert_eq!(snapshot.balance, Decimal::new(7525, 2));
        assert!(snapshot.to_string().contains("Current Balance: ₹75.25"));
    }

    #[rstest]
    fn test_compute_interest_on_savings(mut bank: Bank<MemoryStore>) {
        bank.create_account("S1", "Bob", Decimal::new(1000, 0), true)
            .unwrap();

        let quote = bank.compute_interest("S1").unwrap();

        assert_eq!(quote.interest, Decimal::new(50, 0));
        assert_eq!(quote.rate, Decimal::new(5, 2));
        // Interest is never credited
        assert_eq!(bank.account("S1").unwrap().balance(), Decimal::new(1000, 0));
    }

    #[rstest]
    fn test_compute_interest_on_plain_account(mut bank: Bank<MemoryStore>) {
        bank.create_account("A1", "Alice", Decimal::new(1000, 0), false)
            .unwrap();

        assert_eq!(
            bank.compute_interest("A1").unwrap_err(),
            BankError::not_a_savings_account("A1")
        );
    }

    #[rstest]
    fn test_savings_scenario_round_trip(mut bank: Bank<MemoryStore>) {
        bank.create_account("S1", "Bob", Decimal::new(200, 0), true)
            .unwrap();

        let loaded = bank.account("S1").unwrap();

        assert!(loaded.is_savings());
        assert_eq!(loaded.balance(), Decimal::new(20000, 2));
        assert_eq!(loaded.interest_rate(), Some(Decimal::new(5, 2)));
    }

    #[test]
    fn test_into_store_returns_records() {
        let mut bank = Bank::new(MemoryStore::new());
        bank.create_account("A1", "Alice", Decimal::ONE, false)
            .unwrap();

        let store = bank.into_store();

        assert!(store.exists("A1").unwrap());
    }
}
