//! I/O module
//!
//! Handles account record encoding and storage.
//!
//! # Components
//!
//! - `record` - JSON record format (encoding, decoding, type dispatch)
//! - `file_store` - One record file per account in a data directory
//! - `memory_store` - In-memory store for tests and benchmarks

pub mod file_store;
pub mod memory_store;
pub mod record;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use record::{decode, encode, AccountRecord};
