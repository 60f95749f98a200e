//! Bank Records Library
//! # Overview
//!
//! This library manages single-user bank account records persisted as one JSON
//! file per account, with an interactive text menu on top.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, SavingsAccount, BankError)
//! - [`cli`] - CLI arguments parsing, logging setup and the interactive menu
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Account operations over a record store
//!   - [`core::traits`] - The keyed store abstraction
//! - [`io`] - Record encoding and storage backends
//!
//! # Account Kinds
//!
//! - **BankAccount**: id, holder name and a non-negative balance
//! - **SavingsAccount**: a bank account with a fixed interest rate (default 5%)
//!   and simple annual interest computation
//!
//! # Operations
//!
//! Every operation loads the account, applies the change and saves it again:
//!
//! - **Create**: open an account with an initial balance
//! - **Deposit**: add a positive amount
//! - **Withdraw**: remove a positive amount no larger than the balance
//! - **View balance**: read-only snapshot
//! - **Compute interest**: `balance * interest_rate`, savings accounts only

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{AccountStore, Bank};
pub use io::{FileStore, MemoryStore};
pub use types::{
    Account, AccountId, AccountKind, AccountSnapshot, BankError, InterestQuote, SavingsAccount,
};
