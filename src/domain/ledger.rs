use serde::{Deserialize, Serialize};

use super::{Cents, ExpenseRecord, normalize_category};

/// Append-only list of expense records, kept in insertion order.
///
/// The sum of every recorded amount always fits in `Cents`, so any subset sum
/// (per month, per category) is overflow-free as well.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    total: Cents,
}

/// Per-category spending for one month.
/// Categories appear in the order they were first logged that month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub categories: Vec<(String, Cents)>,
    pub total: Cents,
}

impl MonthlyBreakdown {
    /// Spending for a category, 0 if it had none.
    pub fn spent(&self, category: &str) -> Cents {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the ledger.
    /// Rejected without mutation if it would push the ledger total past `Cents::MAX`.
    pub fn append(&mut self, record: ExpenseRecord) -> Result<(), LedgerError> {
        if record.amount_cents < 0 {
            return Err(LedgerError::NegativeAmount(record.amount_cents));
        }
        let total = self
            .total
            .checked_add(record.amount_cents)
            .ok_or(LedgerError::TotalOverflow {
                total: self.total,
                amount: record.amount_cents,
            })?;
        self.total = total;
        self.records.push(record);
        Ok(())
    }

    /// Sum of all recorded amounts.
    pub fn total(&self) -> Cents {
        self.total
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose date starts with the given month prefix, in insertion order.
    pub fn records_for_month<'a>(
        &'a self,
        year_month: &'a str,
    ) -> impl Iterator<Item = &'a ExpenseRecord> + 'a {
        self.records.iter().filter(move |r| r.in_month(year_month))
    }

    /// Total spent on a category in a month.
    pub fn monthly_spend(&self, category: &str, year_month: &str) -> Cents {
        let category = normalize_category(category);
        self.records_for_month(year_month)
            .filter(|r| r.category == category)
            .map(|r| r.amount_cents)
            .sum()
    }

    /// Spending per category for a month plus the grand total.
    pub fn monthly_breakdown(&self, year_month: &str) -> MonthlyBreakdown {
        let mut breakdown = MonthlyBreakdown::default();

        for record in self.records_for_month(year_month) {
            match breakdown
                .categories
                .iter_mut()
                .find(|(name, _)| *name == record.category)
            {
                Some((_, total)) => *total += record.amount_cents,
                None => breakdown
                    .categories
                    .push((record.category.clone(), record.amount_cents)),
            }
            breakdown.total += record.amount_cents;
        }

        breakdown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NegativeAmount(Cents),
    TotalOverflow { total: Cents, amount: Cents },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NegativeAmount(amount) => {
                write!(f, "amount must not be negative (got {} cents)", amount)
            }
            LedgerError::TotalOverflow { total, amount } => write!(
                f,
                "adding {} cents to the recorded total of {} cents is too large",
                amount, total
            ),
        }
    }
}

impl std::error::Error for LedgerError {}
