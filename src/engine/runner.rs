use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    adapters::{console::Console, output, record_store::RecordStore},
    config::AtmConfig,
    engine::state::{CommandOutcome, Processed, State},
    error::AtmError,
    models::{
        account::Account,
        command::{Command, MenuChoice},
        transaction::Amount,
    },
};

/// Why a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    LoadFailed,
    AuthenticationFailed,
    Exited,
    /// Standard input was closed or the console failed.
    InputClosed,
}

enum SessionState {
    AwaitingLoad,
    Authenticating(Account),
    MenuActive(State),
    Terminated(SessionOutcome),
}

enum Prompted<T> {
    Value(T),
    Rejected,
    Closed,
}

/// One run of the ATM, from loading the record to termination.
pub struct Session<'a, S, R, W> {
    store: &'a S,
    console: Console<R, W>,
    config: &'a AtmConfig,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(store: &'a S, console: Console<R, W>, config: &'a AtmConfig) -> Self {
        Session {
            store,
            console,
            config,
        }
    }

    /// Drives the session until it terminates. There is no way back to
    /// loading once a session has ended.
    pub fn run(&mut self) -> SessionOutcome {
        let mut state = SessionState::AwaitingLoad;

        loop {
            let step = match state {
                SessionState::AwaitingLoad => self.load(),
                SessionState::Authenticating(account) => self.authenticate(account),
                SessionState::MenuActive(state) => self.menu_step(state),
                SessionState::Terminated(outcome) => return outcome,
            };

            state = step.unwrap_or_else(|e| {
                warn!(error = %e, "console unavailable, ending session");
                SessionState::Terminated(SessionOutcome::InputClosed)
            });
        }
    }

    fn load(&mut self) -> Result<SessionState, AtmError> {
        match self.store.load() {
            Ok(account) => Ok(SessionState::Authenticating(account)),
            Err(AtmError::NotFound(path)) => {
                warn!(path = %path.display(), "account file not found");
                self.console
                    .say(&output::account_not_found(&path.display().to_string()))?;
                Ok(SessionState::Terminated(SessionOutcome::LoadFailed))
            }
            Err(e) => {
                warn!(error = %e, "account record unreadable");
                self.console.say(output::MALFORMED_RECORD)?;
                Ok(SessionState::Terminated(SessionOutcome::LoadFailed))
            }
        }
    }

    fn authenticate(&mut self, account: Account) -> Result<SessionState, AtmError> {
        self.console.say(output::LOGIN_BANNER)?;

        let hint = self.config.pin_hint.then_some(account.pin);
        let Some(entry) = self.console.prompt(&output::pin_prompt(hint))? else {
            return Ok(SessionState::Terminated(SessionOutcome::InputClosed));
        };

        match account.verify_pin(&entry) {
            Ok(()) => {
                info!("PIN accepted");
                self.console.say(&output::welcome(account.name.as_str()))?;
                Ok(SessionState::MenuActive(State::new(account)))
            }
            Err(AtmError::IncorrectPin) => {
                warn!("incorrect PIN entered");
                self.console.say(output::INCORRECT_PIN)?;
                Ok(SessionState::Terminated(SessionOutcome::AuthenticationFailed))
            }
            Err(e) => {
                warn!(error = %e, "PIN entry rejected");
                self.console.say(output::INVALID_PIN_FORMAT)?;
                Ok(SessionState::Terminated(SessionOutcome::AuthenticationFailed))
            }
        }
    }

    /// One pass through the menu. Every choice except Exit lands back in
    /// `MenuActive`.
    fn menu_step(&mut self, mut state: State) -> Result<SessionState, AtmError> {
        for line in output::MENU_LINES {
            self.console.say(line)?;
        }

        let Some(entry) = self.console.prompt(output::MENU_PROMPT)? else {
            return Ok(SessionState::Terminated(SessionOutcome::InputClosed));
        };

        let choice = match entry.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(AtmError::InvalidOption(number)) => {
                debug!(number, "menu option out of range");
                self.console.say(output::INVALID_OPTION)?;
                return Ok(SessionState::MenuActive(state));
            }
            Err(e) => {
                debug!(error = %e, "menu input rejected");
                self.console.say(output::INVALID_INPUT)?;
                return Ok(SessionState::MenuActive(state));
            }
        };

        let cmd = match choice {
            MenuChoice::Withdraw => {
                let prompted =
                    self.read_amount(output::WITHDRAW_PROMPT, output::INVALID_WITHDRAW_AMOUNT)?;
                match prompted {
                    Prompted::Value(amount) => Command::Withdraw { amount },
                    Prompted::Rejected => return Ok(SessionState::MenuActive(state)),
                    Prompted::Closed => {
                        return Ok(SessionState::Terminated(SessionOutcome::InputClosed));
                    }
                }
            }
            MenuChoice::Deposit => {
                let prompted =
                    self.read_amount(output::DEPOSIT_PROMPT, output::INVALID_DEPOSIT_AMOUNT)?;
                match prompted {
                    Prompted::Value(amount) => Command::Deposit { amount },
                    Prompted::Rejected => return Ok(SessionState::MenuActive(state)),
                    Prompted::Closed => {
                        return Ok(SessionState::Terminated(SessionOutcome::InputClosed));
                    }
                }
            }
            MenuChoice::CheckBalance => Command::CheckBalance,
            MenuChoice::Exit => {
                debug!(balance = %state.balance(), "user exited");
                self.console.say(output::FAREWELL)?;
                return Ok(SessionState::Terminated(SessionOutcome::Exited));
            }
        };

        match state.process_single_command(cmd, self.store) {
            Ok(processed) => self.report(processed)?,
            Err(AtmError::InsufficientBalance) => {
                info!(balance = %state.balance(), "withdrawal exceeds balance");
                self.console.say(output::INSUFFICIENT_BALANCE)?;
            }
            Err(AtmError::BalanceLimitExceeded) => {
                info!(balance = %state.balance(), "deposit exceeds balance limit");
                self.console.say(output::BALANCE_LIMIT)?;
            }
            Err(e) => {
                warn!(error = %e, "command rejected");
                self.console.say(output::TRANSACTION_FAILED)?;
            }
        }

        Ok(SessionState::MenuActive(state))
    }

    fn read_amount(
        &mut self,
        prompt: &str,
        rejection: &str,
    ) -> Result<Prompted<Amount>, AtmError> {
        let Some(entry) = self.console.prompt(prompt)? else {
            return Ok(Prompted::Closed);
        };

        match entry.parse::<Amount>() {
            Ok(amount) => Ok(Prompted::Value(amount)),
            Err(e) => {
                debug!(error = %e, "amount rejected");
                self.console.say(rejection)?;
                Ok(Prompted::Rejected)
            }
        }
    }

    fn report(&mut self, processed: Processed) -> Result<(), AtmError> {
        let symbol = self.config.currency_symbol.as_str();
        let line = match processed.outcome {
            CommandOutcome::Withdrawn { amount, balance } => {
                output::withdrawn(symbol, amount, balance)
            }
            CommandOutcome::Deposited { amount, balance } => {
                output::deposited(symbol, amount, balance)
            }
            CommandOutcome::Balance(balance) => output::current_balance(symbol, balance),
        };
        self.console.say(&line)?;

        // The in-memory balance is kept; the stored record stays behind until
        // the next successful save.
        if let Err(e) = processed.persistence {
            warn!(error = %e, "stored balance is out of date");
            self.console.say(output::SAVE_FAILED)?;
        }
        Ok(())
    }
}

/// Run a full session over the given input and output streams.
pub fn run_session<S: RecordStore, R: BufRead, W: Write>(
    store: &S,
    input: R,
    output: W,
    config: &AtmConfig,
) -> SessionOutcome {
    Session::new(store, Console::new(input, output), config).run()
}
