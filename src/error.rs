use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("Account file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Malformed account record: {0}")]
    MalformedRecord(String),
    #[error("Incorrect PIN")]
    IncorrectPin,
    #[error("Invalid input: {0:?}")]
    InvalidInput(String),
    #[error("Invalid menu option: {0}")]
    InvalidOption(i64),
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Insufficient balance for withdrawal")]
    InsufficientBalance,
    #[error("Balance would exceed the account limit")]
    BalanceLimitExceeded,
    #[error("Cannot save account data: {0}")]
    PersistenceError(#[source] io::Error),
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AtmError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.message().to_string())
    }
}

impl From<csv::Error> for AtmError {
    fn from(error: csv::Error) -> Self {
        Self::MalformedRecord(error.to_string())
    }
}
