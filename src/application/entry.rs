//! Validation of raw user input for a new ledger entry.
//!
//! Each function takes the text exactly as typed and returns either the
//! parsed value or a [`LedgerError::Validation`] naming the field. Nothing is
//! written until every field has passed.

use chrono::NaiveDate;

use crate::config::LedgerConfig;
use crate::domain::{parse_cents, Category, Cents};

use super::LedgerError;

/// Parse an entry date. Empty input means `today` when `allow_default` is set.
pub fn parse_date_input(
    raw: &str,
    allow_default: bool,
    today: NaiveDate,
    config: &LedgerConfig,
) -> Result<NaiveDate, LedgerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return if allow_default {
            Ok(today)
        } else {
            Err(LedgerError::validation("date", "a date is required"))
        };
    }

    config.parse_date(raw).map_err(|_| {
        LedgerError::validation(
            "date",
            format!(
                "'{}' does not match the format {} (e.g. {})",
                raw,
                config.date_format,
                config.format_date(today)
            ),
        )
    })
}

/// Non-negative decimal with at most two fraction digits.
pub fn parse_amount_input(raw: &str) -> Result<Cents, LedgerError> {
    let fraction_digits = raw.trim().split_once('.').map(|(_, f)| f.len());
    if fraction_digits.is_some_and(|n| n > 2) {
        return Err(LedgerError::validation(
            "amount",
            format!("'{}' has more than two decimal places", raw.trim()),
        ));
    }
    let cents = parse_cents(raw)
        .map_err(|e| LedgerError::validation("amount", format!("'{}' is {}", raw.trim(), e)))?;
    if cents < 0 {
        return Err(LedgerError::validation(
            "amount",
            "amount must not be negative",
        ));
    }
    Ok(cents)
}

/// Accepts `Income`/`Expense` or the shortcuts `I`/`E`, in any letter case.
pub fn parse_category_input(raw: &str) -> Result<Category, LedgerError> {
    match raw.trim().to_lowercase().as_str() {
        "i" | "income" => Ok(Category::Income),
        "e" | "expense" => Ok(Category::Expense),
        _ => Err(LedgerError::validation(
            "category",
            format!(
                "'{}' is not a category. Enter 'I' for Income or 'E' for Expense",
                raw.trim()
            ),
        )),
    }
}

/// Free text; may be empty. A line break would split the stored row.
pub fn parse_description_input(raw: &str) -> Result<String, LedgerError> {
    let description = raw.trim();
    if description.contains(['\n', '\r']) {
        return Err(LedgerError::validation(
            "description",
            "description must fit on one line",
        ));
    }
    Ok(description.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_date_input() {
        let config = LedgerConfig::default();
        assert_eq!(
            parse_date_input("01-01-2024", false, today(), &config).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(parse_date_input("  ", true, today(), &config).unwrap(), today());
    }

    #[test]
    fn test_date_input_errors_name_the_field() {
        let config = LedgerConfig::default();
        let err = parse_date_input("", false, today(), &config).unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "date", .. }));

        let err = parse_date_input("2024-01-01", true, today(), &config).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("05-03-2024"));
    }

    #[test]
    fn test_amount_input() {
        assert_eq!(parse_amount_input("1000").unwrap(), 100000);
        assert_eq!(parse_amount_input("0").unwrap(), 0);
        assert_eq!(parse_amount_input(" 12.5 ").unwrap(), 1250);

        for bad in ["", "ten", "-5", "1,000"] {
            let err = parse_amount_input(bad).unwrap_err();
            assert!(
                matches!(err, LedgerError::Validation { field: "amount", .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_amount_input_rejects_sub_cent_precision() {
        for bad in ["10.999", "0.005", "1.000"] {
            let err = parse_amount_input(bad).unwrap_err();
            assert!(
                matches!(err, LedgerError::Validation { field: "amount", .. }),
                "{bad:?} should be rejected"
            );
            assert!(err.to_string().contains("more than two decimal places"));
        }
        assert_eq!(parse_amount_input("10.99").unwrap(), 1099);
    }

    #[test]
    fn test_category_input() {
        assert_eq!(parse_category_input("I").unwrap(), Category::Income);
        assert_eq!(parse_category_input("income").unwrap(), Category::Income);
        assert_eq!(parse_category_input("E").unwrap(), Category::Expense);
        assert_eq!(parse_category_input("Expense").unwrap(), Category::Expense);
        assert!(matches!(
            parse_category_input("Savings"),
            Err(LedgerError::Validation {
                field: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_description_input() {
        assert_eq!(parse_description_input(" Salary ").unwrap(), "Salary");
        assert_eq!(parse_description_input("").unwrap(), "");
        assert!(parse_description_input("two\nlines").is_err());
    }
}
