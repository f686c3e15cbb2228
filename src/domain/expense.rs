use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, LedgerError, normalize_category};

pub type ExpenseId = Uuid;

/// Number of leading characters of a date that identify its month ("2024-05").
pub const YEAR_MONTH_LEN: usize = 7;

/// A single logged expense.
/// Records are immutable - the ledger only ever appends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    /// Date as entered, expected as YYYY-MM-DD but never validated
    pub date: String,
    /// Title-cased category name
    pub category: String,
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    pub description: Option<String>,
    /// When the entry was logged
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new record. The category is normalized here so every record in a
    /// ledger uses the same casing as the budget table keys.
    pub fn new(
        date: impl Into<String>,
        category: &str,
        amount_cents: Cents,
    ) -> Result<Self, LedgerError> {
        if amount_cents < 0 {
            return Err(LedgerError::NegativeAmount(amount_cents));
        }
        let date: String = date.into();
        Ok(Self {
            id: Uuid::new_v4(),
            date: date.trim().to_string(),
            category: normalize_category(category),
            amount_cents,
            description: None,
            recorded_at: Utc::now(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Month identifier of this record: the first seven characters of its date.
    pub fn year_month(&self) -> &str {
        year_month_of(&self.date)
    }

    /// Whether this record falls in the given month, by plain string prefix.
    pub fn in_month(&self, year_month: &str) -> bool {
        self.date.starts_with(year_month)
    }
}

/// Month prefix of a date string. Shorter strings are returned whole.
pub fn year_month_of(date: &str) -> &str {
    match date.char_indices().nth(YEAR_MONTH_LEN) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}
