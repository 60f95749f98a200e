//! In-memory account store
//!
//! Keeps encoded records in a `HashMap`, so every load and save still goes
//! through the record codec. Used by tests and benchmarks.

use crate::core::traits::AccountStore;
use crate::io::record::{decode, encode};
use crate::types::{validate_account_id, Account, AccountId, BankError};
use std::collections::HashMap;

/// Account store backed by a map of id to record text
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<AccountId, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: HashMap::new(),
        }
    }

    /// Store raw record text under `id`, bypassing the encoder
    pub fn insert_raw(&mut self, id: impl Into<AccountId>, text: impl Into<String>) {
        self.records.insert(id.into(), text.into());
    }

    /// Raw record text stored under `id`
    pub fn raw(&self, id: &str) -> Option<&str> {
        self.records.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AccountStore for MemoryStore {
    fn load(&self, id: &str) -> Result<Account, BankError> {
        validate_account_id(id)?;
        let text = self
            .records
            .get(id)
            .ok_or_else(|| BankError::account_not_found(id))?;
        decode(id, text)
    }

    fn save(&mut self, account: &Account) -> Result<(), BankError> {
        validate_account_id(account.id())?;
        let text = encode(account)?;
        self.records.insert(account.id().to_string(), text);
        Ok(())
    }

    fn exists(&self, id: &str) -> Result<bool, BankError> {
        validate_account_id(id)?;
        Ok(self.records.contains_key(id))
    }
}
