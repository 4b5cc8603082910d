use chrono::NaiveDate;
use tracing::debug;

use crate::config::LedgerConfig;
use crate::domain::{self, Summary, Transaction};

use super::LedgerError;

/// Date-range queries over ledger rows, taking bounds in the ledger's
/// textual date format.
pub struct QueryEngine {
    config: LedgerConfig,
}

impl QueryEngine {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Parse a range bound; `field` names it in the error ("start date").
    pub fn parse_bound(&self, field: &'static str, raw: &str) -> Result<NaiveDate, LedgerError> {
        self.config.parse_date(raw).map_err(|_| {
            LedgerError::validation(
                field,
                format!("'{}' does not match the format {}", raw.trim(), self.config.date_format),
            )
        })
    }

    /// Rows dated from `start` to `end` inclusive, in ledger order.
    /// A start after the end yields no rows rather than an error.
    pub fn filter_by_range(
        &self,
        transactions: &[Transaction],
        start: &str,
        end: &str,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let start = self.parse_bound("start date", start)?;
        let end = self.parse_bound("end date", end)?;
        Ok(self.filter_by_dates(transactions, start, end))
    }

    pub fn filter_by_dates(
        &self,
        transactions: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Transaction> {
        let filtered = domain::filter_by_range(transactions, start, end);
        debug!(
            start = %self.config.format_date(start),
            end = %self.config.format_date(end),
            matched = filtered.len(),
            total = transactions.len(),
            "filtered ledger"
        );
        filtered
    }

    pub fn summarize(&self, transactions: &[Transaction]) -> Summary {
        domain::summarize(transactions)
    }
}
