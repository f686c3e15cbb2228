use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::{BudgetAlert, MonthlyReport, TrackerService};
use crate::domain::{Cents, format_cents};

use super::ReportFormat;

const MENU_TITLE: &str = "====== Expense Tracker ======";
const FAREWELL: &str = "Goodbye! Stay within your budget.";
const MIN_CATEGORY_WIDTH: usize = 20;

/// A menu selection, parsed from one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogExpense,
    SetBudget,
    ShowReport,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::LogExpense,
            "2" => MenuChoice::SetBudget,
            "3" => MenuChoice::ShowReport,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Rendering options for the menu.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub currency: String,
    pub format: ReportFormat,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            format: ReportFormat::Table,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive menu loop. Reads answers line by line from `input` and writes
/// prompts and results to `output`; all state changes go through the service.
pub struct Menu<R, W> {
    input: R,
    output: W,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, options: MenuOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self, service: &mut TrackerService) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("Choose an option (1-4): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                MenuChoice::LogExpense => self.log_expense(service)?,
                MenuChoice::SetBudget => self.set_budget(service)?,
                MenuChoice::ShowReport => self.show_report(service)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    Flow::Quit
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Try again.\n")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", MENU_TITLE)?;
        writeln!(self.output, "1. Log Expense")?;
        writeln!(self.output, "2. Set Monthly Budget")?;
        writeln!(self.output, "3. Show Report")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn log_expense(&mut self, service: &mut TrackerService) -> Result<Flow> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Enter category (e.g., Food, Transport): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Enter amount spent: ")? else {
            return Ok(Flow::Quit);
        };

        match service.log_expense(&date, &category, &amount, Some(description)) {
            Ok(result) => {
                match result.alert {
                    Some(BudgetAlert::Exceeded {
                        category,
                        spent,
                        budget,
                    }) => writeln!(
                        self.output,
                        "Warning: you have exceeded the budget for {} (Spent: {}, Budget: {})",
                        category,
                        money(&self.options.currency, spent),
                        money(&self.options.currency, budget)
                    )?,
                    Some(BudgetAlert::Approaching {
                        category,
                        spent,
                        budget,
                        percentage,
                    }) => writeln!(
                        self.output,
                        "Notice: you have used {:.0}% of the budget for {} (Spent: {}, Budget: {})",
                        percentage,
                        category,
                        money(&self.options.currency, spent),
                        money(&self.options.currency, budget)
                    )?,
                    None => {}
                }
                writeln!(self.output, "Expense logged successfully.\n")?;
            }
            Err(err) => writeln!(self.output, "{}. Try again.\n", err)?,
        }

        Ok(Flow::Continue)
    }

    fn set_budget(&mut self, service: &mut TrackerService) -> Result<Flow> {
        let Some(category) = self.prompt("Enter category to set budget for: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Enter monthly budget amount: ")? else {
            return Ok(Flow::Quit);
        };

        match service.set_budget(&category, &amount) {
            Ok(result) => {
                let replaced = result
                    .previous
                    .map(|prev| format!(" (was {})", money(&self.options.currency, prev)))
                    .unwrap_or_default();
                writeln!(
                    self.output,
                    "Budget set for {}: {}{}\n",
                    result.category,
                    money(&self.options.currency, result.amount_cents),
                    replaced
                )?;
            }
            Err(err) => writeln!(self.output, "{}. Try again.\n", err)?,
        }

        Ok(Flow::Continue)
    }

    fn show_report(&mut self, service: &TrackerService) -> Result<Flow> {
        let Some(month) = self.prompt("Enter month to view report (YYYY-MM): ")? else {
            return Ok(Flow::Quit);
        };

        let report = service.monthly_report(&month);
        match self.options.format {
            ReportFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            ReportFormat::Table => self.print_report_table(&report)?,
        }

        Ok(Flow::Continue)
    }

    fn print_report_table(&mut self, report: &MonthlyReport) -> Result<()> {
        writeln!(self.output, "\nReport for {}", report.month)?;
        writeln!(
            self.output,
            "\nTotal Spending: {}\n",
            money(&self.options.currency, report.total)
        )?;

        if report.categories.is_empty() {
            writeln!(self.output, "No expenses recorded for {}.\n", report.month)?;
            return Ok(());
        }

        // Column grows to fit the longest category so names are never cut
        let width = report
            .categories
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_CATEGORY_WIDTH);

        writeln!(
            self.output,
            "{:<width$} {:>14} {:>14} {:>6}  {}",
            "CATEGORY",
            "SPENT",
            "BUDGET",
            "USED",
            "STATUS",
            width = width
        )?;
        writeln!(self.output, "{}", "-".repeat(width + 52))?;

        for status in &report.categories {
            writeln!(
                self.output,
                "{:<width$} {:>14} {:>14} {:>5.0}%  {}",
                status.category,
                money(&self.options.currency, status.spent),
                money(&self.options.currency, status.budget),
                status.percentage,
                status.state,
                width = width
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}

fn money(currency: &str, cents: Cents) -> String {
    format!("{}{}", currency, format_cents(cents))
}
