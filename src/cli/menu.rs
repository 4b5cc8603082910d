use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::application::entry::{
    parse_amount_input, parse_category_input, parse_date_input, parse_description_input,
};
use crate::application::{LedgerError, LedgerService};
use crate::domain::Transaction;

use super::{print_charts, print_report};

/// Interactive add/view/exit loop. Returns when the user picks exit.
pub fn run_menu(service: &LedgerService) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        println!();
        println!("1. Add a new transaction");
        println!("2. View transactions and summary within a date range");
        println!("3. Exit");

        let choice: String = Input::with_theme(&theme)
            .with_prompt("Enter your choice (1-3)")
            .allow_empty(true)
            .interact_text()?;

        match choice.trim() {
            "1" => add_flow(service, &theme)?,
            "2" => view_flow(service, &theme)?,
            "3" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid choice. Enter 1, 2, or 3."),
        }
    }
}

fn add_flow(service: &LedgerService, theme: &ColorfulTheme) -> Result<()> {
    let config = service.config();
    let today = Local::now().date_naive();

    let date = prompt_valid(
        theme,
        &format!(
            "Enter the date of the transaction ({}) or press enter for today's date",
            config.format_date(today)
        ),
        |raw| parse_date_input(raw, true, today, config),
    )?;
    let amount_cents = prompt_valid(theme, "Enter the amount", parse_amount_input)?;
    let category = prompt_valid(
        theme,
        "Enter the category ('I' for Income or 'E' for Expense)",
        parse_category_input,
    )?;
    let description = prompt_valid(
        theme,
        "Enter a description (optional)",
        parse_description_input,
    )?;

    let transaction =
        Transaction::new(date, amount_cents, category).with_description(description);
    match service.add_entry(transaction) {
        Ok(_) => println!("Entry added successfully"),
        Err(e) => eprintln!("Could not add entry: {}", e),
    }
    Ok(())
}

fn view_flow(service: &LedgerService, theme: &ColorfulTheme) -> Result<()> {
    let config = service.config();
    let engine = service.engine();
    let example = config.format_date(Local::now().date_naive());

    let start = prompt_valid(
        theme,
        &format!("Enter the start date (e.g. {})", example),
        |raw| engine.parse_bound("start date", raw),
    )?;
    let end = prompt_valid(
        theme,
        &format!("Enter the end date (e.g. {})", example),
        |raw| engine.parse_bound("end date", raw),
    )?;

    let report = match service.view_dates(start, end) {
        Ok(report) => report,
        Err(LedgerError::FileMissing(path)) => {
            eprintln!(
                "No ledger at {}. Add a transaction first.",
                path.display()
            );
            return Ok(());
        }
        Err(e) => {
            eprintln!("Could not read the ledger: {}", e);
            return Ok(());
        }
    };

    print_report(&report, config);
    if report.is_empty() {
        return Ok(());
    }

    let plot = Confirm::with_theme(theme)
        .with_prompt("Do you want to see a plot?")
        .default(false)
        .interact()?;
    let dashboard = Confirm::with_theme(theme)
        .with_prompt("Do you want to see a dashboard?")
        .default(false)
        .interact()?;
    print_charts(&report, config, plot, dashboard);

    Ok(())
}

/// Ask until `parse` accepts the input; the validation message is shown inline.
fn prompt_valid<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, LedgerError>,
) -> Result<T> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| {
            parse(input.as_str())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse(raw.as_str())?)
}
