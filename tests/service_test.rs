mod common;

use std::fs;

use anyhow::Result;
use common::{entry, test_service};
use tally::application::LedgerError;
use tally::domain::Category;

#[test]
fn test_add_entry_creates_ledger_file() -> Result<()> {
    let (service, _temp) = test_service()?;
    assert!(!service.store().path().exists());

    service.add_entry(entry("01-01-2024", 100000, Category::Income, "Salary"))?;

    let contents = fs::read_to_string(service.store().path())?;
    assert!(contents.starts_with("date,amount,category,description\n"));
    assert_eq!(service.list_transactions()?.len(), 1);
    Ok(())
}

#[test]
fn test_add_entry_rejects_unknown_category() -> Result<()> {
    let (service, _temp) = test_service()?;

    let err = service
        .add_entry(entry("01-01-2024", 100, Category::from("Savings"), "Nope"))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation {
            field: "category",
            ..
        }
    ));
    assert!(!service.store().path().exists());
    Ok(())
}

#[test]
fn test_add_entry_rejects_multiline_description() -> Result<()> {
    let (service, _temp) = test_service()?;

    let err = service
        .add_entry(entry("01-01-2024", 100, Category::Expense, "one\ntwo"))
        .unwrap_err();

    assert!(err.is_validation());
    Ok(())
}

#[test]
fn test_zero_amount_is_allowed() -> Result<()> {
    let (service, _temp) = test_service()?;

    service.add_entry(entry("01-01-2024", 0, Category::Expense, "Free sample"))?;

    let rows = service.list_transactions()?;
    assert_eq!(rows[0].amount_cents, 0);
    Ok(())
}
