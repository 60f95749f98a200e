//! Core traits for account persistence
//!
//! This module defines the storage abstraction that lets the bank service run
//! against the on-disk record directory or an in-memory map interchangeably.

use crate::types::{Account, BankError};

/// Keyed storage of account records
///
/// Implementations own the mapping from account id to serialized record.
/// A save fully replaces any earlier record for the same id (last write wins),
/// and a failed save leaves the earlier record intact.
pub trait AccountStore {
    /// Load the account stored under `id`
    ///
    /// Returns `AccountNotFound` if no record exists for the id.
    fn load(&self, id: &str) -> Result<Account, BankError>;

    /// Store the account under its own id
    fn save(&mut self, account: &Account) -> Result<(), BankError>;

    /// Check whether a record exists for `id`
    fn exists(&self, id: &str) -> Result<bool, BankError>;
}
