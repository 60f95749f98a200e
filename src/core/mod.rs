//! Core business logic module
//!
//! This module contains the account operation components:
//! - `traits` - Storage abstraction for interchangeable record stores
//! - `bank` - Account operations (create, deposit, withdraw, balance, interest)

pub mod bank;
pub mod traits;

pub use bank::Bank;
pub use traits::AccountStore;
