mod common;

use anyhow::Result;
use common::{MayExpenses, run_menu, run_menu_json, run_menu_with};
use expense_orbit::application::TrackerService;
use expense_orbit::cli::MenuOptions;

#[test]
fn test_exit_prints_farewell() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(&mut service, &["4"])?;

    assert!(output.contains("====== Expense Tracker ======"));
    assert!(output.contains("Goodbye! Stay within your budget."));
    Ok(())
}

#[test]
fn test_end_of_input_stops_loop() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(&mut service, &["1", "2024-05-01"])?;

    assert!(service.ledger().is_empty());
    assert!(!output.contains("Goodbye"));
    Ok(())
}

#[test]
fn test_invalid_choice_redisplays_menu() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(&mut service, &["9", "hello", "4"])?;

    assert_eq!(output.matches("Invalid choice. Try again.").count(), 2);
    assert_eq!(output.matches("====== Expense Tracker ======").count(), 3);
    assert!(service.ledger().is_empty());
    assert!(service.budgets().is_empty());
    Ok(())
}

#[test]
fn test_log_expense_flow() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(
        &mut service,
        &["1", "2024-05-01", "food", "Lunch", "12.50", "4"],
    )?;

    assert!(output.contains("Expense logged successfully."));
    assert!(!output.contains("Warning"));
    assert_eq!(service.ledger().len(), 1);

    let record = &service.ledger().records()[0];
    assert_eq!(record.category, "Food");
    assert_eq!(record.amount_cents, 1250);
    assert_eq!(record.description.as_deref(), Some("Lunch"));
    Ok(())
}

#[test]
fn test_log_expense_invalid_amount() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(&mut service, &["1", "2024-05-01", "Food", "", "abc", "4"])?;

    assert!(output.contains("Invalid amount 'abc'"));
    assert!(output.contains("Try again."));
    assert!(!output.contains("Expense logged successfully."));
    assert!(service.ledger().is_empty());
    Ok(())
}

#[test]
fn test_over_budget_warning_flow() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(
        &mut service,
        &[
            "2", "Food", "100", // budget
            "1", "2024-05-01", "Food", "", "50", // within
            "1", "2024-05-15", "food", "", "80", // over
            "4",
        ],
    )?;

    assert!(output.contains("Budget set for Food: ₹100.00"));
    assert_eq!(
        output
            .matches("Warning: you have exceeded the budget for Food (Spent: ₹130.00, Budget: ₹100.00)")
            .count(),
        1
    );
    assert_eq!(output.matches("Expense logged successfully.").count(), 2);

    // The warning belongs to the second log, after the first confirmation
    let first_ok = output.find("Expense logged successfully.").unwrap_or(usize::MAX);
    let warning = output.find("Warning:").unwrap_or(0);
    assert!(warning > first_ok);
    Ok(())
}

#[test]
fn test_approaching_notice_flow() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(
        &mut service,
        &["2", "Food", "100", "1", "2024-05-01", "Food", "", "95", "4"],
    )?;

    assert!(output.contains("Notice: you have used 95% of the budget for Food"));
    assert!(output.contains("Expense logged successfully."));
    Ok(())
}

#[test]
fn test_set_budget_flow() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(
        &mut service,
        &["2", "food", "100", "2", "FOOD", "200", "2", "Food", "xyz", "4"],
    )?;

    assert!(output.contains("Budget set for Food: ₹100.00\n"));
    assert!(output.contains("Budget set for Food: ₹200.00 (was ₹100.00)"));
    assert!(output.contains("Invalid amount 'xyz'"));
    assert_eq!(service.get_budget("Food"), Some(20000));
    Ok(())
}

#[test]
fn test_show_report_flow() -> Result<()> {
    let mut service = TrackerService::new();
    MayExpenses::create(&mut service)?;

    let output = run_menu(&mut service, &["3", "2024-05", "4"])?;

    assert!(output.contains("Report for 2024-05"));
    assert!(output.contains("Total Spending: ₹158.49"));

    let food_line = output
        .lines()
        .find(|l| l.starts_with("Food "))
        .unwrap_or_default();
    assert!(food_line.contains("₹130.00"));
    assert!(food_line.contains("₹100.00"));
    assert!(food_line.contains("130%"));
    assert!(food_line.ends_with("Over budget"));

    let transport_line = output
        .lines()
        .find(|l| l.starts_with("Transport "))
        .unwrap_or_default();
    assert!(transport_line.ends_with("Within budget"));

    let entertainment_line = output
        .lines()
        .find(|l| l.starts_with("Entertainment "))
        .unwrap_or_default();
    assert!(entertainment_line.contains("₹0.00"));
    assert!(entertainment_line.ends_with("Over budget"));
    Ok(())
}

#[test]
fn test_show_report_empty_month() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(&mut service, &["3", "2024-06", "4"])?;

    assert!(output.contains("Total Spending: ₹0.00"));
    assert!(output.contains("No expenses recorded for 2024-06."));
    Ok(())
}

#[test]
fn test_show_report_is_idempotent() -> Result<()> {
    let mut service = TrackerService::new();
    MayExpenses::create(&mut service)?;

    let first = run_menu(&mut service, &["3", "2024-05", "4"])?;
    let second = run_menu(&mut service, &["3", "2024-05", "4"])?;
    assert_eq!(first, second);

    let twice = run_menu(&mut service, &["3", "2024-05", "3", "2024-05", "4"])?;
    let reports: Vec<&str> = twice.split("Report for ").skip(1).collect();
    assert_eq!(reports.len(), 2);
    let first_report = reports[0].split("====== Expense Tracker").next();
    let second_report = reports[1].split("====== Expense Tracker").next();
    assert_eq!(first_report, second_report);
    Ok(())
}

#[test]
fn test_show_report_blank_month_matches_every_record() -> Result<()> {
    let mut service = TrackerService::new();
    service.log_expense("2023-01-01", "Food", "10", None)?;
    service.log_expense("2024-05-01", "Rent", "5.50", None)?;

    let output = run_menu(&mut service, &["3", "", "4"])?;

    assert!(output.contains("Total Spending: ₹15.50"));
    assert!(output.lines().any(|l| l.starts_with("Food ")));
    assert!(output.lines().any(|l| l.starts_with("Rent ")));
    Ok(())
}

#[test]
fn test_show_report_keeps_long_category_names_apart() -> Result<()> {
    let mut service = TrackerService::new();
    service.log_expense("2024-05-01", "Household Supplies Kitchen", "10", None)?;
    service.log_expense("2024-05-02", "Household Supplies Garden", "20", None)?;

    let output = run_menu(&mut service, &["3", "2024-05", "4"])?;

    let kitchen = output
        .lines()
        .find(|l| l.starts_with("Household Supplies Kitchen "))
        .unwrap_or_default();
    let garden = output
        .lines()
        .find(|l| l.starts_with("Household Supplies Garden "))
        .unwrap_or_default();
    assert!(kitchen.contains("₹10.00"));
    assert!(garden.contains("₹20.00"));

    // Spent columns stay aligned with the widened category column
    assert_eq!(kitchen.find('₹'), garden.find('₹'));
    Ok(())
}

#[test]
fn test_sub_cent_amount_is_rejected() -> Result<()> {
    let mut service = TrackerService::new();
    let output = run_menu(
        &mut service,
        &["2", "Food", "100", "1", "2024-05-01", "Food", "", "100.005", "4"],
    )?;

    assert!(output.contains("Invalid amount '100.005': at most two decimal places are allowed"));
    assert!(!output.contains("Expense logged successfully."));
    assert!(service.ledger().is_empty());
    Ok(())
}

#[test]
fn test_custom_currency() -> Result<()> {
    let mut service = TrackerService::new();
    let options = MenuOptions {
        currency: "$".to_string(),
        ..MenuOptions::default()
    };
    let output = run_menu_with(&mut service, &["2", "Rent", "1200", "4"], options)?;

    assert!(output.contains("Budget set for Rent: $1200.00"));
    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let mut service = TrackerService::new();
    MayExpenses::create(&mut service)?;

    let output = run_menu_json(&mut service, &["3", "2024-05", "4"])?;

    let start = output.find('{').unwrap_or(0);
    let end = output.rfind('}').map(|i| i + 1).unwrap_or(output.len());
    let value: serde_json::Value = serde_json::from_str(&output[start..end])?;

    assert_eq!(value["month"], "2024-05");
    assert_eq!(value["total"], 15849);
    assert_eq!(value["categories"].as_array().map(Vec::len), Some(3));
    Ok(())
}
