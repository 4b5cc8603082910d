//! Text charts for the terminal: the income/expense time series and the
//! three-panel dashboard.

use colored::Colorize;

use crate::application::ChartData;
use crate::config::LedgerConfig;
use crate::domain::{format_cents, Cents, DailyPoint};

use super::truncate;

const BAR_WIDTH: usize = 40;

/// Daily income and expense over the requested range, one bar per series and day.
pub fn render_time_series(
    income: &[DailyPoint],
    expense: &[DailyPoint],
    config: &LedgerConfig,
) -> String {
    let mut lines = vec![title("Income and Expenses Over Time")];
    if income.is_empty() {
        lines.push("  No days in range.".to_string());
        return lines.join("\n");
    }

    let max = largest(income.iter().chain(expense).map(|p| p.cents));
    lines.push(format!("{:<12} {:<8} {:>12}", "DATE", "SERIES", "AMOUNT"));
    lines.push("-".repeat(34 + BAR_WIDTH));

    for (inc, exp) in income.iter().zip(expense) {
        lines.push(format!(
            "{:<12} {:<8} {:>12} {}",
            config.format_date(inc.date),
            "income",
            format_cents(inc.cents),
            bar(inc.cents, max).green()
        ));
        lines.push(format!(
            "{:<12} {:<8} {:>12} {}",
            "",
            "expense",
            format_cents(exp.cents),
            bar(exp.cents, max).red()
        ));
    }

    lines.join("\n")
}

/// Expense breakdown, monthly income/expense and cumulative net savings.
pub fn render_dashboard(data: &ChartData, config: &LedgerConfig) -> String {
    let mut lines = Vec::new();

    lines.push(title("Expenses Breakdown"));
    let total: Cents = data.expense_breakdown.iter().map(|d| d.total).sum();
    if total == 0 {
        lines.push("  No expenses in range.".to_string());
    } else {
        let max = largest(data.expense_breakdown.iter().map(|d| d.total));
        for item in &data.expense_breakdown {
            let percentage = item.total as f64 * 100.0 / total as f64;
            let label = if item.description.is_empty() {
                "(no description)"
            } else {
                item.description.as_str()
            };
            lines.push(format!(
                "  {:<20} {:>12} {:>6.1}% {}",
                truncate(label, 20),
                format_cents(item.total),
                percentage,
                bar(item.total, max).red()
            ));
        }
    }

    lines.push(String::new());
    lines.push(title("Monthly Income and Expense Summary"));
    if data.monthly.is_empty() {
        lines.push("  No transactions in range.".to_string());
    } else {
        let max = largest(data.monthly.iter().flat_map(|m| [m.income, m.expense]));
        for month in &data.monthly {
            lines.push(format!(
                "  {:<8} {:<8} {:>12} {}",
                month.label(),
                "income",
                format_cents(month.income),
                bar(month.income, max).green()
            ));
            lines.push(format!(
                "  {:<8} {:<8} {:>12} {}",
                "",
                "expense",
                format_cents(month.expense),
                bar(month.expense, max).red()
            ));
        }
    }

    lines.push(String::new());
    lines.push(title("Net Savings Over Time"));
    if data.net_savings.is_empty() {
        lines.push("  No transactions in range.".to_string());
    } else {
        let max = largest(data.net_savings.iter().map(|p| p.cents));
        for point in &data.net_savings {
            let cells = bar(point.cents, max);
            let cells = if point.cents < 0 {
                cells.red()
            } else {
                cells.blue()
            };
            lines.push(format!(
                "  {:<12} {:>12} {}",
                config.format_date(point.date),
                format_cents(point.cents),
                cells
            ));
        }
    }

    lines.join("\n")
}

fn title(text: &str) -> String {
    text.bold().to_string()
}

fn largest(values: impl Iterator<Item = Cents>) -> Cents {
    values.map(|v| v.abs()).max().unwrap_or(0)
}

/// Bar proportional to |value| / max. Non-zero values get at least one cell.
fn bar(value: Cents, max: Cents) -> String {
    if max <= 0 || value == 0 {
        return String::new();
    }
    let cells = (value.abs() as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.clamp(1, BAR_WIDTH))
}
