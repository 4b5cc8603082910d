use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cents;

/// Default textual date format for stored and entered dates: `05-03-2024`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Category of a ledger row.
///
/// Only `Income` and `Expense` can be entered, but rows written by other tools
/// may carry any text; those are kept verbatim as `Other` and count towards
/// neither total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Income,
    Expense,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Other(name) => name,
        }
    }

    /// Returns true for the two categories the summary counts.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "Income" => Category::Income,
            "Expense" => Category::Expense,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the ledger. Rows have no identity; two rows with the same
/// content are indistinguishable except by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount_cents: Cents, category: Category) -> Self {
        assert!(amount_cents >= 0, "Transaction amount must not be negative");
        Self {
            date,
            amount_cents,
            category,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Signed effect of this row on net savings.
    pub fn net_cents(&self) -> Cents {
        match self.category {
            Category::Income => self.amount_cents,
            Category::Expense => -self.amount_cents,
            Category::Other(_) => 0,
        }
    }
}

pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_text_is_case_sensitive() {
        assert_eq!(Category::from("Income"), Category::Income);
        assert_eq!(Category::from("Expense"), Category::Expense);
        assert_eq!(
            Category::from("income"),
            Category::Other("income".to_string())
        );
        assert!(!Category::from("Transfer").is_known());
        assert_eq!(Category::from("Transfer").to_string(), "Transfer");
    }

    #[test]
    fn test_net_cents() {
        let salary = Transaction::new(date(2024, 1, 1), 100000, Category::Income);
        let groceries = Transaction::new(date(2024, 1, 5), 20000, Category::Expense);
        let gift = Transaction::new(date(2024, 1, 6), 999, Category::from("Gift"));

        assert_eq!(salary.net_cents(), 100000);
        assert_eq!(groceries.net_cents(), -20000);
        assert_eq!(gift.net_cents(), 0);
    }

    #[test]
    fn test_date_round_trip() {
        let parsed = parse_date("05-03-2024", DATE_FORMAT).unwrap();
        assert_eq!(parsed, date(2024, 3, 5));
        assert_eq!(format_date(parsed, DATE_FORMAT), "05-03-2024");

        assert_eq!(format_date(date(2024, 12, 31), DATE_FORMAT), "31-12-2024");
        assert!(parse_date("2024-03-05", DATE_FORMAT).is_err());
        assert!(parse_date("31-02-2024", DATE_FORMAT).is_err());
    }

    #[test]
    #[should_panic(expected = "Transaction amount must not be negative")]
    fn test_transaction_rejects_negative_amount() {
        Transaction::new(date(2024, 1, 1), -1, Category::Expense);
    }
}
