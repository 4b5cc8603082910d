use chrono::NaiveDate;

use crate::config::LedgerConfig;
use crate::domain::{Category, Transaction};
use crate::storage::LedgerStore;

use super::{LedgerError, QueryEngine, RangeReport};

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (command line, menu, tests).
pub struct LedgerService {
    store: LedgerStore,
    engine: QueryEngine,
}

impl LedgerService {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            store: LedgerStore::new(config.clone()),
            engine: QueryEngine::new(config),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        self.store.config()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Create the ledger file if it does not exist yet.
    pub fn initialize(&self) -> Result<bool, LedgerError> {
        self.store.initialize()
    }

    /// Record a new entry, creating the ledger file first if needed.
    /// Only `Income` and `Expense` can be added.
    pub fn add_entry(&self, transaction: Transaction) -> Result<Transaction, LedgerError> {
        if let Category::Other(name) = &transaction.category {
            return Err(LedgerError::validation(
                "category",
                format!("'{}' is not Income or Expense", name),
            ));
        }
        if transaction.description.contains(['\n', '\r']) {
            return Err(LedgerError::validation(
                "description",
                "description must fit on one line",
            ));
        }

        self.store.initialize()?;
        self.store.append(&transaction)?;
        Ok(transaction)
    }

    /// Every row in ledger order. Does not create a missing file.
    pub fn list_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.store.read_all()
    }

    /// Rows and summary for a range given in the ledger's date format.
    pub fn view_range(&self, start: &str, end: &str) -> Result<RangeReport, LedgerError> {
        let start = self.engine.parse_bound("start date", start)?;
        let end = self.engine.parse_bound("end date", end)?;
        self.view_dates(start, end)
    }

    pub fn view_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<RangeReport, LedgerError> {
        let all = self.store.read_all()?;
        let transactions = self.engine.filter_by_dates(&all, start, end);
        let summary = self.engine.summarize(&transactions);

        Ok(RangeReport {
            start,
            end,
            transactions,
            summary,
        })
    }
}
