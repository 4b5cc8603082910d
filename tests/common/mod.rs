// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use tally::application::LedgerService;
use tally::config::LedgerConfig;
use tally::domain::{Category, Cents, Transaction, DATE_FORMAT};
use tempfile::TempDir;

/// Helper to create a service backed by a ledger file in a temporary directory.
/// The file itself is not created.
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let config = LedgerConfig::new(temp_dir.path().join("finance_data.csv"));
    Ok((LedgerService::new(config), temp_dir))
}

/// Helper to parse a dd-mm-yyyy string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).unwrap()
}

pub fn entry(date: &str, amount: Cents, category: Category, description: &str) -> Transaction {
    Transaction::new(parse_date(date), amount, category).with_description(description)
}

/// Test fixture: the salary / groceries / transport ledger
pub struct StandardLedger;

impl StandardLedger {
    pub fn entries() -> Vec<Transaction> {
        vec![
            entry("01-01-2024", 100000, Category::Income, "Salary"),
            entry("05-01-2024", 20000, Category::Expense, "Groceries"),
            entry("10-01-2024", 5000, Category::Expense, "Transport"),
        ]
    }

    pub fn record(service: &LedgerService) -> Result<Vec<Transaction>> {
        let entries = Self::entries();
        for transaction in &entries {
            service.add_entry(transaction.clone())?;
        }
        Ok(entries)
    }
}
