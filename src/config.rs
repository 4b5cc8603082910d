use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::application::LedgerError;
use crate::domain::{format_date, parse_date, DATE_FORMAT};

/// Ledger file used when no path is given.
pub const DEFAULT_LEDGER_FILE: &str = "finance_data.csv";

/// Where the ledger lives and how its dates are written.
/// Shared by the store, the query engine and the input validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub path: PathBuf,
    /// chrono strftime pattern for stored and entered dates
    pub date_format: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEDGER_FILE),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl LedgerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Use `date_format` for stored and entered dates. The pattern must
    /// render a date that parses back to the same day.
    pub fn with_date_format(
        mut self,
        date_format: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        let date_format = date_format.into();
        check_date_format(&date_format)?;
        self.date_format = date_format;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_date(&self, input: &str) -> Result<NaiveDate, chrono::ParseError> {
        parse_date(input, &self.date_format)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, &self.date_format)
    }
}

fn check_date_format(date_format: &str) -> Result<(), LedgerError> {
    let sample = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();

    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(date_format)).is_err() {
        return Err(LedgerError::validation(
            "date format",
            format!("'{}' is not a valid strftime pattern", date_format),
        ));
    }

    match parse_date(&rendered, date_format) {
        Ok(parsed) if parsed == sample => Ok(()),
        _ => Err(LedgerError::validation(
            "date format",
            format!(
                "'{}' must include the day, month and year (renders {} as '{}')",
                date_format, sample, rendered
            ),
        )),
    }
}
