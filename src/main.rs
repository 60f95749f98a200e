//! Bank Records CLI
//!
//! Interactive menu for creating accounts, moving funds, checking balances and
//! computing savings interest. Records are stored as `<account>.json` files.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-dir ./accounts
//! cargo run -- --data-dir ./accounts --interest-rate 0.07 --log-level info
//! ```
//!
//! # Exit Codes
//!
//! - 0: Exit selected from the menu, or input ended
//! - 1: Error (data directory unusable, invalid interest rate, terminal I/O failure)

use bank_records::cli::{self, CliArgs, Menu};
use bank_records::{Bank, BankError, FileStore};
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), BankError> {
    let store = FileStore::open(&args.data_dir)?;
    let bank = Bank::new(store).with_interest_rate(args.interest_rate)?;

    tracing::info!(data_dir = %args.data_dir.display(), "Starting bank records menu");

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), bank);
    menu.run()?;

    Ok(())
}
