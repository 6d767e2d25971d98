use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use tracing::warn;

use crate::error::AtmError;

/// Longest name the record format accepts; longer names are cut at load.
pub const MAX_NAME_CHARS: usize = 49;

/// Largest amount or balance handled, 999,999,999,999,999.99. Keeping well
/// under `Decimal`'s 28 digits leaves room for the two cent digits.
pub const MAX_MONEY: Decimal = Decimal::from_parts(0x5D89_FFFF, 0x0163_4578, 0, false, 2);

/// Display name of the account holder, at most [`MAX_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Validates a raw name taken from the record.
    ///
    /// Leading whitespace is dropped and anything past [`MAX_NAME_CHARS`] is
    /// truncated. Empty names and names carrying a field separator or line
    /// break cannot be written back and are rejected.
    pub fn parse(raw: &str) -> Result<Self, AtmError> {
        let name = raw.trim_start();

        if name.is_empty() {
            return Err(AtmError::MalformedRecord("empty account name".into()));
        }
        if name.contains([',', '\n', '\r']) {
            return Err(AtmError::MalformedRecord(
                "account name contains a separator".into(),
            ));
        }

        let char_count = name.chars().count();
        if char_count > MAX_NAME_CHARS {
            warn!(
                chars = char_count,
                limit = MAX_NAME_CHARS,
                "account name truncated"
            );
            return Ok(AccountName(name.chars().take(MAX_NAME_CHARS).collect()));
        }

        Ok(AccountName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw `pin,name,balance` line as stored on disk.
#[derive(Deserialize, Debug)]
pub struct AccountRecord {
    pub pin: i32,

    pub name: String,

    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

/// The single account held by a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub pin: i32,
    pub name: AccountName,
    pub balance: Decimal,
}

impl Account {
    /// Checks a typed PIN entry. The entry must be an integer and is compared
    /// by value, so `0042` matches a stored `42`.
    pub fn verify_pin(&self, entry: &str) -> Result<(), AtmError> {
        let entered: i32 = entry
            .trim()
            .parse()
            .map_err(|_| AtmError::InvalidInput(entry.trim().to_string()))?;

        if entered != self.pin {
            return Err(AtmError::IncorrectPin);
        }
        Ok(())
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = AtmError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        if record.balance.abs() > MAX_MONEY {
            return Err(AtmError::MalformedRecord(format!(
                "balance {} exceeds {}",
                record.balance, MAX_MONEY
            )));
        }

        Ok(Account {
            pin: record.pin,
            name: AccountName::parse(&record.name)?,
            balance: to_cents(record.balance),
        })
    }
}

/// Rounds to two fractional digits and fixes the scale at exactly two.
pub fn to_cents(value: Decimal) -> Decimal {
    let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}
