//! File-per-account store
//!
//! Each account lives in `<data dir>/<account id>.json`. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! target, so readers only ever see a complete record.

use crate::core::traits::AccountStore;
use crate::io::record::{decode, encode};
use crate::types::{validate_account_id, Account, BankError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Extension of record files
pub const RECORD_EXTENSION: &str = "json";

/// Account store backed by a directory of JSON records
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, BankError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "Opened record directory");
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record file for `id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccountId` if the id cannot be used as a file name.
    pub fn record_path(&self, id: &str) -> Result<PathBuf, BankError> {
        validate_account_id(id)?;
        Ok(self.root.join(format!("{}.{}", id, RECORD_EXTENSION)))
    }
}

impl AccountStore for FileStore {
    fn load(&self, id: &str) -> Result<Account, BankError> {
        let path = self.record_path(id)?;

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BankError::account_not_found(id));
            }
            Err(e) => return Err(e.into()),
        };

        debug!(account = id, path = %path.display(), "Loaded record");
        decode(id, &text)
    }

    fn save(&mut self, account: &Account) -> Result<(), BankError> {
        let path = self.record_path(account.id())?;
        let text = encode(account)?;

        // The temporary file is removed on drop if any step before persist fails
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(text.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;

        info!(account = account.id(), path = %path.display(), "Saved record");
        Ok(())
    }

    fn exists(&self, id: &str) -> Result<bool, BankError> {
        Ok(self.record_path(id)?.is_file())
    }
}
