// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use expense_orbit::application::TrackerService;
use expense_orbit::cli::{Menu, MenuOptions, ReportFormat};

/// Helper to run the menu over scripted input lines, returning captured output.
pub fn run_menu(service: &mut TrackerService, lines: &[&str]) -> Result<String> {
    run_menu_with(service, lines, MenuOptions::default())
}

/// Same as `run_menu` with JSON report output.
pub fn run_menu_json(service: &mut TrackerService, lines: &[&str]) -> Result<String> {
    let options = MenuOptions {
        format: ReportFormat::Json,
        ..MenuOptions::default()
    };
    run_menu_with(service, lines, options)
}

pub fn run_menu_with(
    service: &mut TrackerService,
    lines: &[&str],
    options: MenuOptions,
) -> Result<String> {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut menu = Menu::new(Cursor::new(input), Vec::new(), options);
    menu.run(service)?;
    Ok(String::from_utf8(menu.into_output())?)
}

/// Test fixture: the May 2024 scenario used across files
pub struct MayExpenses;

impl MayExpenses {
    /// Food budget of 100.00 plus a few logged expenses in April and May 2024
    pub fn create(service: &mut TrackerService) -> Result<()> {
        service.set_budget("Food", "100")?;
        service.set_budget("Transport", "40")?;
        service.log_expense("2024-05-01", "Food", "50", None)?;
        service.log_expense("2024-05-03", "transport", "12.50", Some("Bus pass".into()))?;
        service.log_expense("2024-04-28", "Food", "30", None)?;
        service.log_expense("2024-05-15", "food", "80", None)?;
        service.log_expense("2024-05-20", "Entertainment", "15.99", None)?;
        Ok(())
    }
}
