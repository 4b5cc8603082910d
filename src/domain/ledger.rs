use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Category, Cents, Transaction};

/// Income, expense and net totals over a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Cents,
    pub total_expense: Cents,
    pub net_savings: Cents,
}

/// Sum of amounts for one description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionTotal {
    pub description: String,
    pub total: Cents,
}

/// A value attached to one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub cents: Cents,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub income: Cents,
    pub expense: Cents,
}

impl MonthlyTotal {
    /// Month label such as `2024-01`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive range of days used as the x-axis of a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAxis {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayAxis {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Axis from the earliest to the latest date of `rows`, if any.
    pub fn spanning(rows: &[Transaction]) -> Option<Self> {
        let start = rows.iter().map(|t| t.date).min()?;
        let end = rows.iter().map(|t| t.date).max()?;
        Some(Self { start, end })
    }

    /// Every day from start to end inclusive; empty when start > end.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }
}

/// Rows dated within `start..=end`, in their original order.
/// A reversed range matches nothing.
pub fn filter_by_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    if start > end {
        return Vec::new();
    }
    transactions
        .iter()
        .filter(|t| start <= t.date && t.date <= end)
        .cloned()
        .collect()
}

/// Totals over `Income` and `Expense` rows. Other categories are ignored.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0, 0), |(income, expense), t| match t.category {
                Category::Income => (income + t.amount_cents, expense),
                Category::Expense => (income, expense + t.amount_cents),
                Category::Other(_) => (income, expense),
            });

    Summary {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
    }
}

/// Sum of amounts per distinct description within one category,
/// in order of first appearance.
pub fn group_by_description(
    transactions: &[Transaction],
    category: &Category,
) -> Vec<DescriptionTotal> {
    let mut totals: Vec<DescriptionTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for t in transactions.iter().filter(|t| &t.category == category) {
        match index.get(t.description.as_str()) {
            Some(&i) => totals[i].total += t.amount_cents,
            None => {
                index.insert(t.description.as_str(), totals.len());
                totals.push(DescriptionTotal {
                    description: t.description.clone(),
                    total: t.amount_cents,
                });
            }
        }
    }

    totals
}

/// Per-day totals for one category over every day of `axis`,
/// with zero on days that have no matching rows.
pub fn daily_series(
    transactions: &[Transaction],
    category: &Category,
    axis: DayAxis,
) -> Vec<DailyPoint> {
    let mut by_day: HashMap<NaiveDate, Cents> = HashMap::new();
    for t in transactions.iter().filter(|t| &t.category == category) {
        *by_day.entry(t.date).or_insert(0) += t.amount_cents;
    }

    axis.days()
        .map(|date| DailyPoint {
            date,
            cents: by_day.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Running net savings (income minus expense) for each date that has rows,
/// in chronological order.
pub fn cumulative_net_series(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<NaiveDate, Cents> = BTreeMap::new();
    for t in transactions {
        *by_day.entry(t.date).or_insert(0) += t.net_cents();
    }

    let mut running = 0;
    by_day
        .into_iter()
        .map(|(date, net)| {
            running += net;
            DailyPoint {
                date,
                cents: running,
            }
        })
        .collect()
}

/// Income and expense per calendar month that has rows, oldest first.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<(i32, u32), (Cents, Cents)> = BTreeMap::new();
    for t in transactions {
        let entry = by_month.entry((t.date.year(), t.date.month())).or_insert((0, 0));
        match t.category {
            Category::Income => entry.0 += t.amount_cents,
            Category::Expense => entry.1 += t.amount_cents,
            Category::Other(_) => {}
        }
    }

    by_month
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlyTotal {
            year,
            month,
            income,
            expense,
        })
        .collect()
}
