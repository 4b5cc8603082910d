use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::application::LedgerError;
use crate::config::LedgerConfig;
use crate::domain::{format_cents, parse_cents, Category, Transaction};

use super::COLUMNS;

/// Append-only CSV storage for ledger rows.
///
/// Every call opens the file, does its work and closes it again; nothing is
/// cached between calls and concurrent writers are not guarded against.
pub struct LedgerStore {
    config: LedgerConfig,
}

impl LedgerStore {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// Create the ledger file with only the header row if it does not exist.
    /// Existing files are left untouched. Returns true when a file was created.
    pub fn initialize(&self) -> Result<bool, LedgerError> {
        let path = self.path();
        if path.exists() {
            debug!(path = %path.display(), "ledger file already present");
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        write_transactions(file, &[], &self.config, true)?;

        info!(path = %path.display(), "created ledger file");
        Ok(true)
    }

    /// Append one row at the end of the file.
    pub fn append(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        let path = self.path();
        let file = OpenOptions::new().append(true).open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LedgerError::FileMissing(path.to_path_buf())
            } else {
                LedgerError::Io(e)
            }
        })?;
        write_transactions(file, std::slice::from_ref(transaction), &self.config, false)?;

        info!(
            path = %path.display(),
            date = %self.config.format_date(transaction.date),
            amount = %format_cents(transaction.amount_cents),
            category = %transaction.category,
            "entry added"
        );
        Ok(())
    }

    /// Load every row in file order.
    pub fn read_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        let path = self.path();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LedgerError::FileMissing(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?;
        if !headers.is_empty() && headers.iter().ne(COLUMNS) {
            return Err(LedgerError::parse(
                1,
                "header",
                format!("expected '{}'", COLUMNS.join(",")),
            ));
        }

        let mut transactions = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            // +2 for the header and 0-indexing
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            transactions.push(parse_record(&record, line, &self.config)?);
        }

        debug!(path = %path.display(), rows = transactions.len(), "read ledger");
        Ok(transactions)
    }
}

/// Write rows in ledger column order, optionally preceded by the header.
/// Returns the number of data rows written.
pub fn write_transactions<W: Write>(
    writer: W,
    transactions: &[Transaction],
    config: &LedgerConfig,
    include_header: bool,
) -> Result<usize, LedgerError> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    if include_header {
        csv_writer.write_record(COLUMNS)?;
    }

    for transaction in transactions {
        let date = config.format_date(transaction.date);
        let amount = format_cents(transaction.amount_cents);
        csv_writer.write_record([
            date.as_str(),
            amount.as_str(),
            transaction.category.as_str(),
            transaction.description.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

fn parse_record(
    record: &StringRecord,
    line: u64,
    config: &LedgerConfig,
) -> Result<Transaction, LedgerError> {
    if record.len() != COLUMNS.len() {
        return Err(LedgerError::parse(
            line,
            "row",
            format!("expected {} fields, found {}", COLUMNS.len(), record.len()),
        ));
    }

    let date_str = &record[0];
    let date = config.parse_date(date_str).map_err(|e| {
        LedgerError::parse(line, "date", format!("'{}': {}", date_str, e))
    })?;

    let amount_str = &record[1];
    let amount_cents = parse_cents(amount_str).map_err(|e| {
        LedgerError::parse(line, "amount", format!("'{}': {}", amount_str, e))
    })?;
    if amount_cents < 0 {
        return Err(LedgerError::parse(
            line,
            "amount",
            format!("'{}': must not be negative", amount_str),
        ));
    }

    Ok(
        Transaction::new(date, amount_cents, Category::from(&record[2]))
            .with_description(&record[3]),
    )
}
