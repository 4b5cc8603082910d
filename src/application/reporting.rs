use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    cumulative_net_series, daily_series, group_by_description, monthly_totals, Category,
    DailyPoint, DayAxis, DescriptionTotal, MonthlyTotal, Summary, Transaction,
};

/// Rows and totals for one requested date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

/// Series behind the time-series plot and the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub income: Vec<DailyPoint>,
    pub expense: Vec<DailyPoint>,
    pub expense_breakdown: Vec<DescriptionTotal>,
    pub monthly: Vec<MonthlyTotal>,
    pub net_savings: Vec<DailyPoint>,
}

impl RangeReport {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The requested range, used as the day axis of both daily series.
    pub fn axis(&self) -> DayAxis {
        DayAxis::new(self.start, self.end)
    }

    pub fn chart_data(&self) -> ChartData {
        let axis = self.axis();
        ChartData {
            income: daily_series(&self.transactions, &Category::Income, axis),
            expense: daily_series(&self.transactions, &Category::Expense, axis),
            expense_breakdown: group_by_description(&self.transactions, &Category::Expense),
            monthly: monthly_totals(&self.transactions),
            net_savings: cumulative_net_series(&self.transactions),
        }
    }
}
