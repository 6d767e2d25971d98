use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tracing::{debug, error};

use crate::error::AtmError;
use crate::models::account::{Account, AccountRecord, to_cents};

/// Durable home of the single account record.
pub trait RecordStore {
    fn load(&self) -> Result<Account, AtmError>;
    fn save(&self, account: &Account) -> Result<(), AtmError>;
}

/// Account record kept as one `pin,name,balance` line in a text file.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileRecordStore { path: path.into() }
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> Result<Account, AtmError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AtmError::NotFound(self.path.clone()),
            _ => AtmError::MalformedRecord(e.to_string()),
        })?;

        let account = read_record(file)?;
        debug!(path = %self.path.display(), "account record loaded");
        Ok(account)
    }

    fn save(&self, account: &Account) -> Result<(), AtmError> {
        // File::create truncates, so each save replaces the previous record.
        let result = File::create(&self.path)
            .map_err(AtmError::PersistenceError)
            .and_then(|file| write_record(file, account));

        match &result {
            Ok(()) => debug!(path = %self.path.display(), "account record saved"),
            Err(e) => error!(path = %self.path.display(), error = %e, "account record not saved"),
        }
        result
    }
}

/// Build CSV reader for the record line: no header, no quoting, fields trimmed.
fn build_record_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// Parses the first line of `reader` into an account. Lines after the first
/// are ignored.
pub fn read_record<R: Read>(reader: R) -> Result<Account, AtmError> {
    let mut csv_reader = build_record_reader(reader);

    let record = csv_reader
        .records()
        .next()
        .ok_or_else(|| AtmError::MalformedRecord("no account record".into()))??;

    if record.len() != 3 {
        return Err(AtmError::MalformedRecord(format!(
            "expected 3 fields, found {}",
            record.len()
        )));
    }

    let raw: AccountRecord = record.deserialize(None)?;
    Account::try_from(raw)
}

/// Writes `account` as a single `pin,name,balance` line, balance with two
/// fractional digits.
pub fn write_record<W: Write>(writer: W, account: &Account) -> Result<(), AtmError> {
    let mut builder = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    builder
        .write_record([
            account.pin.to_string(),
            account.name.to_string(),
            to_cents(account.balance).to_string(),
        ])
        .map_err(into_persistence_error)?;

    builder.flush().map_err(AtmError::PersistenceError)
}

fn into_persistence_error(error: csv::Error) -> AtmError {
    AtmError::PersistenceError(io::Error::other(error))
}
