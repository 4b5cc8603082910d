pub mod charts;
mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::application::entry::{
    parse_amount_input, parse_category_input, parse_date_input, parse_description_input,
};
use crate::application::{LedgerError, LedgerService, RangeReport};
use crate::config::{LedgerConfig, DEFAULT_LEDGER_FILE};
use crate::domain::{format_cents, Transaction, DATE_FORMAT};
use crate::storage::write_transactions;

pub use menu::run_menu;

/// Tally - Personal Income and Expense Ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses in a CSV file, then summarise and chart them")]
#[command(version)]
pub struct Cli {
    /// Ledger CSV file path
    #[arg(short, long, env = "TALLY_FILE", default_value = DEFAULT_LEDGER_FILE)]
    pub file: PathBuf,

    /// Date format for stored and entered dates (chrono strftime syntax)
    #[arg(long, env = "TALLY_DATE_FORMAT", default_value = DATE_FORMAT)]
    pub date_format: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the ledger file with its header row
    Init,

    /// Interactive menu: add, view, exit
    Menu,

    /// Record a transaction
    Add {
        /// Amount (e.g., "50.00" or "50")
        amount: String,

        /// Category: Income or Expense (I/E accepted)
        #[arg(short, long)]
        category: String,

        /// Description of the transaction
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date of the transaction (dd-mm-yyyy, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show transactions and a summary for an inclusive date range
    View {
        /// Start date (dd-mm-yyyy)
        start: String,

        /// End date (dd-mm-yyyy)
        end: String,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Plot income and expenses over time (table format only)
        #[arg(long)]
        plot: bool,

        /// Show the expense, monthly and net savings dashboard (table format only)
        #[arg(long)]
        dashboard: bool,
    },
}

impl Cli {
    pub fn config(&self) -> Result<LedgerConfig, LedgerError> {
        LedgerConfig::new(&self.file).with_date_format(&self.date_format)
    }

    pub fn run(self) -> Result<()> {
        crate::init_tracing(self.verbose);

        let service = LedgerService::new(self.config()?);

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Init => {
                let path = service.config().path().display();
                if service.initialize()? {
                    println!("Ledger initialized: {}", path);
                } else {
                    println!("Ledger already exists: {}", path);
                }
            }

            Commands::Menu => run_menu(&service)?,

            Commands::Add {
                amount,
                category,
                description,
                date,
            } => {
                run_add_command(&service, &amount, &category, &description, date.as_deref())?;
            }

            Commands::View {
                start,
                end,
                format,
                plot,
                dashboard,
            } => {
                run_view_command(&service, &start, &end, &format, plot, dashboard)?;
            }
        }

        Ok(())
    }
}

fn run_add_command(
    service: &LedgerService,
    amount: &str,
    category: &str,
    description: &str,
    date: Option<&str>,
) -> Result<()> {
    let config = service.config();
    let today = Local::now().date_naive();

    let date = parse_date_input(date.unwrap_or(""), true, today, config)?;
    let amount_cents =
        parse_amount_input(amount).context("Invalid amount format. Use '50.00' or '50'")?;
    let category = parse_category_input(category)?;
    let description = parse_description_input(description)?;

    let transaction = service.add_entry(
        Transaction::new(date, amount_cents, category).with_description(description),
    )?;

    println!(
        "Entry added successfully: {} {} {} {}",
        config.format_date(transaction.date),
        format_cents(transaction.amount_cents),
        transaction.category,
        transaction.description
    );
    Ok(())
}

fn run_view_command(
    service: &LedgerService,
    start: &str,
    end: &str,
    format: &str,
    plot: bool,
    dashboard: bool,
) -> Result<()> {
    let config = service.config();
    let report = service.view_range(start, end)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            write_transactions(io::stdout().lock(), &report.transactions, config, true)?;
        }
        _ => print_report(&report, config),
    }

    let (plot, dashboard) = chart_options(format, plot, dashboard);
    print_charts(&report, config, plot, dashboard);
    Ok(())
}

/// Charts are only drawn next to the table; json and csv output stays parseable.
fn chart_options(format: &str, plot: bool, dashboard: bool) -> (bool, bool) {
    if is_machine_readable(format) {
        if plot || dashboard {
            warn!(format, "charts are only drawn with --format table");
        }
        (false, false)
    } else {
        (plot, dashboard)
    }
}

fn is_machine_readable(format: &str) -> bool {
    matches!(format, "json" | "csv")
}

/// Table of the rows in range followed by the income/expense summary.
pub(crate) fn print_report(report: &RangeReport, config: &LedgerConfig) {
    if report.is_empty() {
        println!("No transaction found in the given date range.");
        return;
    }

    println!(
        "Transactions from {} to {}",
        config.format_date(report.start),
        config.format_date(report.end)
    );
    println!(
        "{:<12} {:>12} {:<10} DESCRIPTION",
        "DATE", "AMOUNT", "CATEGORY"
    );
    println!("{}", "-".repeat(60));
    for transaction in &report.transactions {
        println!(
            "{:<12} {:>12} {:<10} {}",
            config.format_date(transaction.date),
            format_cents(transaction.amount_cents),
            truncate(transaction.category.as_str(), 10),
            transaction.description
        );
    }

    println!();
    println!("Summary:");
    println!("Total Income:  ${}", format_cents(report.summary.total_income));
    println!("Total Expense: ${}", format_cents(report.summary.total_expense));
    println!("Net Savings:   ${}", format_cents(report.summary.net_savings));
}

pub(crate) fn print_charts(
    report: &RangeReport,
    config: &LedgerConfig,
    plot: bool,
    dashboard: bool,
) {
    if !plot && !dashboard {
        return;
    }
    let data = report.chart_data();
    if plot {
        println!();
        println!(
            "{}",
            charts::render_time_series(&data.income, &data.expense, config)
        );
    }
    if dashboard {
        println!();
        println!("{}", charts::render_dashboard(&data, config));
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
