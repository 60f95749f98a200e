//! Benchmark suite for the account record codec and stores
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Covers encoding and decoding of both account kinds, and a full
//! deposit cycle (load, mutate, save) against the in-memory and file stores.

use bank_records::io::{decode, encode};
use bank_records::{Account, Bank, FileStore, MemoryStore};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn savings_account() -> Account {
    Account::new_savings("S1", "Bob", Decimal::new(123456, 2), Decimal::new(5, 2))
        .expect("Invalid benchmark account")
}

/// Encode a savings account to record text
#[divan::bench]
fn encode_savings() -> String {
    encode(divan::black_box(&savings_account())).expect("Encoding failed")
}

/// Decode a savings record back into an account
#[divan::bench]
fn decode_savings(bencher: divan::Bencher) {
    let text = encode(&savings_account()).expect("Encoding failed");

    bencher.bench(|| decode("S1", divan::black_box(&text)).expect("Decoding failed"));
}

/// Deposit cycle against the in-memory store
#[divan::bench]
fn deposit_memory_store(bencher: divan::Bencher) {
    let mut bank = Bank::new(MemoryStore::new());
    bank.create_account("A1", "Alice", Decimal::ZERO, false)
        .expect("Create failed");

    bencher.bench_local(|| bank.deposit("A1", Decimal::ONE).expect("Deposit failed"));
}

/// Deposit cycle against the file store (includes the atomic rename)
#[divan::bench]
fn deposit_file_store(bencher: divan::Bencher) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path()).expect("Failed to open store");
    let mut bank = Bank::new(store);
    bank.create_account("A1", "Alice", Decimal::ZERO, false)
        .expect("Create failed");

    bencher.bench_local(|| bank.deposit("A1", Decimal::ONE).expect("Deposit failed"));
}
