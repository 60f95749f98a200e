//! Interactive text menu
//!
//! Reads choices and answers line by line from any `BufRead` and writes
//! prompts and results to any `Write`, so the whole session can be scripted.
//! Every action goes through [`Bank`]; the menu only parses input and turns
//! results and errors into messages.

use crate::core::{AccountStore, Bank};
use crate::types::{format_amount, rate_as_percent, BankError, CURRENCY_SYMBOL};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const BANNER: &str = "
========================================
   Welcome to Bank Account Management
========================================
1. Create New Account
2. Deposit Money
3. Withdraw Money
4. Check Account Balance
5. Calculate Interest (Savings Account)
6. Exit
========================================";

/// A menu entry selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    CalculateInterest,
    Exit,
}

impl MenuChoice {
    /// Parse the text entered at the choice prompt
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateAccount),
            "2" => Some(MenuChoice::Deposit),
            "3" => Some(MenuChoice::Withdraw),
            "4" => Some(MenuChoice::CheckBalance),
            "5" => Some(MenuChoice::CalculateInterest),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parse an amount typed at a prompt
///
/// Accepts plain decimals (`100`, `12.50`) and scientific notation (`1e3`).
///
/// # Errors
///
/// Returns `MalformedInput` for anything else.
pub fn parse_amount(input: &str) -> Result<Decimal, BankError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BankError::malformed_input(input))
}

type FundsOperation<S> = fn(&mut Bank<S>, &str, Decimal) -> Result<Decimal, BankError>;

/// Interactive session over a bank
pub struct Menu<R, W, S: AccountStore> {
    input: R,
    output: W,
    bank: Bank<S>,
}

impl<R: BufRead, W: Write, S: AccountStore> Menu<R, W, S> {
    pub fn new(input: R, output: W, bank: Bank<S>) -> Self {
        Menu {
            input,
            output,
            bank,
        }
    }

    pub fn bank(&self) -> &Bank<S> {
        &self.bank
    }

    /// Consume the menu, returning the output writer and the bank
    pub fn into_parts(self) -> (W, Bank<S>) {
        (self.output, self.bank)
    }

    /// Run the menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only I/O errors on the input or output streams end the session early.
    /// Account errors are printed and the menu continues.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", BANNER)?;

            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::from_input(&choice) {
                Some(MenuChoice::CreateAccount) => self.create_account()?,
                Some(MenuChoice::Deposit) => self.move_funds("deposit", "deposited", Bank::deposit)?,
                Some(MenuChoice::Withdraw) => {
                    self.move_funds("withdraw", "withdrawn", Bank::withdraw)?
                }
                Some(MenuChoice::CheckBalance) => self.check_balance()?,
                Some(MenuChoice::CalculateInterest) => self.calculate_interest()?,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "Thank you for using our banking system. Goodbye!"
                    )?;
                    break;
                }
                None => writeln!(
                    self.output,
                    "Invalid choice! Please enter a number between 1 and 6."
                )?,
            }
        }

        self.output.flush()
    }

    fn create_account(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Create New Account ===")?;

        let Some(id) = self.prompt("Enter Account Number: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Account Holder Name: ")? else {
            return Ok(());
        };
        let Some(raw_amount) =
            self.prompt(&format!("Enter Initial Deposit Amount: {}", CURRENCY_SYMBOL))?
        else {
            return Ok(());
        };
        let initial_balance = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => return self.report(&e),
        };

        let Some(rate_percent) = rate_as_percent(self.bank.interest_rate()) else {
            return self.report(&BankError::arithmetic_overflow("interest rate", &id));
        };
        writeln!(
            self.output,
            "\n1. Normal Bank Account\n2. Savings Account ({}% Interest)",
            rate_percent
        )?;
        let Some(kind) = self.prompt("Choose Account Type (1 or 2): ")? else {
            return Ok(());
        };

        match self
            .bank
            .create_account(&id, &name, initial_balance, kind == "2")
        {
            Ok(account) => writeln!(
                self.output,
                "Account for {} created successfully!",
                account.holder_name()
            ),
            Err(e) => self.report(&e),
        }
    }

    /// Shared flow for deposits and withdrawals
    fn move_funds(
        &mut self,
        verb: &str,
        past_tense: &str,
        operation: FundsOperation<S>,
    ) -> io::Result<()> {
        let Some(id) = self.prompt("\nEnter Account Number: ")? else {
            return Ok(());
        };
        if let Err(e) = self.bank.account(&id) {
            return self.report(&e);
        }

        let Some(raw_amount) =
            self.prompt(&format!("Enter amount to {}: {}", verb, CURRENCY_SYMBOL))?
        else {
            return Ok(());
        };

        let bank = &mut self.bank;
        let result = parse_amount(&raw_amount)
            .and_then(|amount| operation(bank, &id, amount).map(|balance| (amount, balance)));

        match result {
            Ok((amount, balance)) => writeln!(
                self.output,
                "{}{} {} successfully! New balance: {}{}",
                CURRENCY_SYMBOL,
                format_amount(amount),
                past_tense,
                CURRENCY_SYMBOL,
                format_amount(balance)
            ),
            Err(e) => self.report(&e),
        }
    }

    fn check_balance(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("\nEnter Account Number: ")? else {
            return Ok(());
        };

        match self.bank.view_balance(&id) {
            Ok(snapshot) => writeln!(self.output, "\n{}\n", snapshot),
            Err(e) => self.report(&e),
        }
    }

    fn calculate_interest(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("\nEnter Account Number: ")? else {
            return Ok(());
        };

        let result = self
            .bank
            .compute_interest(&id)
            .and_then(|quote| Ok((quote.rate_percent()?, quote.interest)));

        match result {
            Ok((rate_percent, interest)) => writeln!(
                self.output,
                "Annual Interest (@{}%): {}{}",
                rate_percent,
                CURRENCY_SYMBOL,
                format_amount(interest)
            ),
            Err(e) => self.report(&e),
        }
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, error: &BankError) -> io::Result<()> {
        debug!(error = %error, "Operation rejected");

        match error {
            BankError::AccountNotFound { .. } => writeln!(self.output, "Account not found!"),
            BankError::MalformedInput { .. } => {
                writeln!(self.output, "Please enter a valid numeric amount!")
            }
            BankError::NotASavingsAccount { .. } => writeln!(
                self.output,
                "Interest calculation is only available for Savings Accounts!"
            ),
            other => writeln!(self.output, "Error: {}", other),
        }
    }
}
