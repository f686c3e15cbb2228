use tracing::{debug, info};

use crate::domain::{BudgetTable, Cents, ExpenseRecord, Ledger, parse_cents, year_month_of};

use super::reporting::{BudgetAlert, BudgetState, CategoryStatus, MonthlyReport, percentage_of};
use super::AppError;

/// Application service providing the tracker's use cases.
/// Owns the session state: one ledger and one budget table, both kept in memory.
#[derive(Debug, Default)]
pub struct TrackerService {
    ledger: Ledger,
    budgets: BudgetTable,
}

/// Result of logging an expense
pub struct ExpenseResult {
    pub record: ExpenseRecord,
    /// Month-to-date spending for the record's category, including this record
    pub month_spent: Cents,
    pub budget: Option<Cents>,
    pub alert: Option<BudgetAlert>,
}

/// Result of setting a budget
pub struct BudgetResult {
    pub category: String,
    pub amount_cents: Cents,
    pub previous: Option<Cents>,
}

impl TrackerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    // ========================
    // Expense operations
    // ========================

    /// Log a new expense from raw user input.
    /// On an invalid amount, or one the ledger total cannot hold, nothing is recorded.
    pub fn log_expense(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: Option<String>,
    ) -> Result<ExpenseResult, AppError> {
        let amount_cents = parse_amount(amount)?;

        let mut record = ExpenseRecord::new(date, category, amount_cents)
            .map_err(|e| AppError::invalid_amount(amount, e))?;
        if let Some(desc) = description.filter(|d| !d.trim().is_empty()) {
            record = record.with_description(desc.trim());
        }

        self.ledger
            .append(record.clone())
            .map_err(|e| AppError::invalid_amount(amount, e))?;
        debug!(
            id = %record.id,
            date = %record.date,
            category = %record.category,
            amount_cents,
            "logged expense"
        );

        let month = year_month_of(&record.date);
        let month_spent = self.ledger.monthly_spend(&record.category, month);
        let budget = self.budgets.get_budget(&record.category);
        let alert = BudgetAlert::check(&record.category, month_spent, budget);

        if let Some(BudgetAlert::Exceeded { spent, budget, .. }) = &alert {
            info!(category = %record.category, month, spent, budget, "budget exceeded");
        }

        Ok(ExpenseResult {
            record,
            month_spent,
            budget,
            alert,
        })
    }

    // ========================
    // Budget operations
    // ========================

    /// Set (or replace) the monthly budget for a category from raw user input.
    pub fn set_budget(&mut self, category: &str, amount: &str) -> Result<BudgetResult, AppError> {
        let amount_cents = parse_amount(amount)?;
        let (category, previous) = self.budgets.set_budget(category, amount_cents);
        debug!(%category, amount_cents, ?previous, "budget set");

        Ok(BudgetResult {
            category,
            amount_cents,
            previous,
        })
    }

    pub fn get_budget(&self, category: &str) -> Option<Cents> {
        self.budgets.get_budget(category)
    }

    // ========================
    // Reporting
    // ========================

    /// Month-to-date spending for one category.
    pub fn monthly_spend(&self, category: &str, year_month: &str) -> Cents {
        self.ledger.monthly_spend(category, year_month)
    }

    /// Spending report for a month: every category with spending that month,
    /// compared against its budget (0 when unset).
    pub fn monthly_report(&self, year_month: &str) -> MonthlyReport {
        let year_month = year_month.trim();
        let breakdown = self.ledger.monthly_breakdown(year_month);

        let categories = breakdown
            .categories
            .into_iter()
            .map(|(category, spent)| {
                let budget = self.budgets.budget_or_zero(&category);
                CategoryStatus {
                    percentage: percentage_of(spent, budget),
                    state: BudgetState::for_spending(spent, budget),
                    category,
                    spent,
                    budget,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            month = year_month,
            total = breakdown.total,
            categories = categories.len(),
            "built monthly report"
        );

        MonthlyReport {
            month: year_month.to_string(),
            total: breakdown.total,
            categories,
        }
    }
}

/// Parse a user-entered amount, rejecting anything that is not a non-negative decimal.
fn parse_amount(input: &str) -> Result<Cents, AppError> {
    let cents = parse_cents(input).map_err(|e| AppError::invalid_amount(input, e))?;
    if cents < 0 {
        return Err(AppError::invalid_amount(input, "amount must not be negative"));
    }
    Ok(cents)
}
