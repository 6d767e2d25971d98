use rust_decimal::Decimal;

use crate::models::account::to_cents;

pub const LOGIN_BANNER: &str = "\n--- Simple ATM Login ---";
pub const INVALID_PIN_FORMAT: &str = "Invalid PIN format. Exiting...";
pub const INCORRECT_PIN: &str = "Incorrect PIN. Exiting...";
pub const MALFORMED_RECORD: &str =
    "Error reading account data from file. Please check the format.";

pub const MENU_LINES: [&str; 5] = [
    "\n--- ATM Menu ---",
    "1. Withdraw",
    "2. Deposit",
    "3. Check Balance",
    "4. Exit",
];
pub const MENU_PROMPT: &str = "Please choose an option (1-4): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

pub const WITHDRAW_PROMPT: &str = "Enter amount to withdraw: ";
pub const INVALID_WITHDRAW_AMOUNT: &str = "Invalid amount entered.";
pub const INSUFFICIENT_BALANCE: &str = "Transaction Failed: Insufficient balance!";
pub const BALANCE_LIMIT: &str = "Transaction Failed: Balance limit exceeded!";
pub const TRANSACTION_FAILED: &str = "Transaction Failed.";

pub const DEPOSIT_PROMPT: &str = "Enter amount to deposit: ";
pub const INVALID_DEPOSIT_AMOUNT: &str = "Invalid amount entered. Must be greater than zero.";

pub const SAVE_FAILED: &str = "Critical Error: Cannot save account data.";
pub const FAREWELL: &str = "Thank you for using the ATM. Goodbye!";

/// Formats money with its currency symbol and exactly two decimals.
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, to_cents(amount))
}

pub fn account_not_found(path: &str) -> String {
    format!(
        "Account file not found ({path}). Please create a '{path}' file with initial data (e.g., 1234,John Doe,500.00)."
    )
}

pub fn pin_prompt(hint: Option<i32>) -> String {
    match hint {
        Some(pin) => format!("Enter your PIN (e.g., {}): ", pin),
        None => "Enter your PIN: ".to_string(),
    }
}

pub fn welcome(name: &str) -> String {
    format!("\nAccess Granted. Welcome {}!", name)
}

pub fn withdrawn(symbol: &str, amount: Decimal, balance: Decimal) -> String {
    format!(
        "Success! Withdrawn {}. New balance: {}",
        money(symbol, amount),
        money(symbol, balance)
    )
}

pub fn deposited(symbol: &str, amount: Decimal, balance: Decimal) -> String {
    format!(
        "Success! Deposited {}. New balance: {}",
        money(symbol, amount),
        money(symbol, balance)
    )
}

pub fn current_balance(symbol: &str, balance: Decimal) -> String {
    format!("Your current balance is: {}", money(symbol, balance))
}
