use rust_decimal::Decimal;
use tracing::info;

use crate::adapters::record_store::RecordStore;
use crate::error::AtmError;
use crate::models::{
    account::{Account, MAX_MONEY},
    command::Command,
};

/// Result of a command that was accepted against the balance.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Withdrawn { amount: Decimal, balance: Decimal },
    Deposited { amount: Decimal, balance: Decimal },
    Balance(Decimal),
}

/// An accepted command together with the result of persisting it.
///
/// A failed save does not undo the balance change: `outcome` still reports
/// the new in-memory balance and `persistence` carries the write error.
#[derive(Debug)]
pub struct Processed {
    pub outcome: CommandOutcome,
    pub persistence: Result<(), AtmError>,
}

/// In-memory state of an authenticated session, owning the account.
pub struct State {
    account: Account,
}

impl State {
    pub fn new(account: Account) -> Self {
        State { account }
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance
    }

    /// Process a single Command, saving the full record to `store` after
    /// every balance change.
    pub fn process_single_command<S: RecordStore>(
        &mut self,
        cmd: Command,
        store: &S,
    ) -> Result<Processed, AtmError> {
        let outcome = match cmd {
            Command::Withdraw { amount } => {
                let amount = amount.value();
                if amount > self.account.balance {
                    return Err(AtmError::InsufficientBalance);
                }

                self.account.balance -= amount;
                info!(%amount, "withdrawal applied");
                CommandOutcome::Withdrawn {
                    amount,
                    balance: self.account.balance,
                }
            }
            Command::Deposit { amount } => {
                let amount = amount.value();
                self.account.balance = self
                    .account
                    .balance
                    .checked_add(amount)
                    .filter(|balance| *balance <= MAX_MONEY)
                    .ok_or(AtmError::BalanceLimitExceeded)?;
                info!(%amount, "deposit applied");
                CommandOutcome::Deposited {
                    amount,
                    balance: self.account.balance,
                }
            }
            Command::CheckBalance => {
                return Ok(Processed {
                    outcome: CommandOutcome::Balance(self.account.balance),
                    persistence: Ok(()),
                });
            }
        };

        Ok(Processed {
            outcome,
            persistence: store.save(&self.account),
        })
    }
}
