use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::AtmError;
use crate::models::account::{MAX_MONEY, to_cents};

/// Positive amount of money entered at a withdraw or deposit prompt,
/// held at cent precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AtmError;

    /// Amounts are rounded to cents before the positivity check, so
    /// `0.001` is rejected rather than turning into a zero transfer.
    /// Anything above [`MAX_MONEY`] is rejected as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let value =
            Decimal::from_str(text).map_err(|_| AtmError::InvalidAmount(text.to_string()))?;
        if value > MAX_MONEY {
            return Err(AtmError::InvalidAmount(text.to_string()));
        }
        let cents = to_cents(value);

        if cents <= Decimal::ZERO {
            return Err(AtmError::InvalidAmount(text.to_string()));
        }

        Ok(Amount(cents))
    }
}
