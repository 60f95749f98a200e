use crate::types::DEFAULT_INTEREST_RATE;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Manage bank account records stored as JSON files
#[derive(Parser, Debug)]
#[command(name = "bank-records")]
#[command(about = "Manage bank account records stored as JSON files", long_about = None)]
pub struct CliArgs {
    /// Directory holding one record file per account
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding the <account>.json records (created if missing)"
    )]
    pub data_dir: PathBuf,

    /// Interest rate for newly created savings accounts
    #[arg(
        long = "interest-rate",
        value_name = "RATE",
        default_value_t = DEFAULT_INTEREST_RATE,
        value_parser = parse_interest_rate,
        help = "Annual interest rate for new savings accounts as a fraction (default: 0.05)"
    )]
    pub interest_rate: Decimal,

    /// Log verbosity; RUST_LOG overrides it
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Log level written to stderr (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}

fn parse_interest_rate(value: &str) -> Result<Decimal, String> {
    let rate = Decimal::from_str(value.trim())
        .map_err(|e| format!("'{}' is not a decimal rate: {}", value, e))?;
    if rate < Decimal::ZERO {
        return Err(format!("interest rate {} must not be negative", rate));
    }
    Ok(rate)
}
