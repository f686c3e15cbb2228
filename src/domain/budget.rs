use std::collections::HashMap;

use super::{Cents, normalize_category};

/// Monthly budget per category. Setting a budget again replaces the old value.
#[derive(Debug, Clone, Default)]
pub struct BudgetTable {
    budgets: HashMap<String, Cents>,
}

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monthly budget for a category, returning the normalized category
    /// and the previous budget if one existed.
    pub fn set_budget(&mut self, category: &str, amount_cents: Cents) -> (String, Option<Cents>) {
        let category = normalize_category(category);
        let previous = self.budgets.insert(category.clone(), amount_cents);
        (category, previous)
    }

    /// Budget for a category, or `None` when no budget was set.
    pub fn get_budget(&self, category: &str) -> Option<Cents> {
        self.budgets.get(&normalize_category(category)).copied()
    }

    /// Budget used for report comparisons: an unset budget counts as 0.
    pub fn budget_or_zero(&self, category: &str) -> Cents {
        self.get_budget(category).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    /// All budgets sorted by category name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Cents)> {
        let mut entries: Vec<(&str, Cents)> = self
            .budgets
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
