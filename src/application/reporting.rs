use serde::{Deserialize, Serialize};

use crate::domain::Cents;

/// Share of a budget (in percent) above which a logged expense triggers an
/// "approaching" notice.
pub const APPROACHING_THRESHOLD_PERCENT: i64 = 90;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: String,
    pub total: Cents,
    pub categories: Vec<CategoryStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub category: String,
    pub spent: Cents,
    /// Monthly budget, 0 when none is set
    pub budget: Cents,
    /// Percentage of the budget used, 0 when the budget is 0
    pub percentage: f64,
    pub state: BudgetState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetState {
    WithinBudget,
    OverBudget,
}

impl BudgetState {
    pub fn for_spending(spent: Cents, budget: Cents) -> Self {
        if spent <= budget {
            BudgetState::WithinBudget
        } else {
            BudgetState::OverBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetState::WithinBudget => "Within budget",
            BudgetState::OverBudget => "Over budget",
        }
    }
}

impl std::fmt::Display for BudgetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Alert raised after logging an expense into a budgeted category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetAlert {
    Exceeded {
        category: String,
        spent: Cents,
        budget: Cents,
    },
    Approaching {
        category: String,
        spent: Cents,
        budget: Cents,
        percentage: f64,
    },
}

impl BudgetAlert {
    /// Alert for a category's month-to-date spending, if any.
    /// Categories without a budget never raise alerts.
    pub fn check(category: &str, spent: Cents, budget: Option<Cents>) -> Option<Self> {
        let budget = budget?;
        if spent > budget {
            return Some(BudgetAlert::Exceeded {
                category: category.to_string(),
                spent,
                budget,
            });
        }

        // Integer comparison keeps the threshold exact
        if i128::from(spent) * 100 > i128::from(budget) * i128::from(APPROACHING_THRESHOLD_PERCENT)
        {
            Some(BudgetAlert::Approaching {
                category: category.to_string(),
                spent,
                budget,
                percentage: percentage_of(spent, budget),
            })
        } else {
            None
        }
    }
}

/// `spent` as a percentage of `budget`; 0 for a zero budget.
pub fn percentage_of(spent: Cents, budget: Cents) -> f64 {
    if budget > 0 {
        (spent as f64 / budget as f64) * 100.0
    } else {
        0.0
    }
}
