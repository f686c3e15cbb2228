use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Raised for expense and budget amounts that are not a non-negative decimal.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

impl AppError {
    pub fn invalid_amount(input: &str, reason: impl ToString) -> Self {
        AppError::InvalidAmount {
            input: input.trim().to_string(),
            reason: reason.to_string(),
        }
    }
}
